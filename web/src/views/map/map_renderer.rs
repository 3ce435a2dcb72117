use leptos::html::Div;
use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::MarketRecord;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::market::aggregate::summarize_locations;
use crate::market::palette::DAY_COLORS;
use crate::views::map::market_marker::MarketMarker;
use crate::views::map::util::{table_center, DEFAULT_CENTER};

// Echo of the last clicked point, drawn like a Leaflet circle marker.
const CAPTURE_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='20' height='20' viewBox='0 0 20 20'%3E%3Ccircle cx='10' cy='10' r='8' fill='%233388ff' fill-opacity='0.5' stroke='%233388ff' stroke-width='2'/%3E%3C/svg%3E";

/// Selectable base tile layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLayer {
    Blanco,
    Negro,
    Default,
}

impl BaseLayer {
    pub const ALL: [BaseLayer; 3] = [BaseLayer::Blanco, BaseLayer::Negro, BaseLayer::Default];

    pub fn label(&self) -> &'static str {
        match self {
            BaseLayer::Blanco => "Blanco",
            BaseLayer::Negro => "Negro",
            BaseLayer::Default => "Default",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            BaseLayer::Blanco => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
            BaseLayer::Negro => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png",
            BaseLayer::Default => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        }
    }

    pub fn attribution(&self) -> &'static str {
        match self {
            BaseLayer::Blanco | BaseLayer::Negro => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
            }
            BaseLayer::Default => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
        }
    }
}

/// The map viewport: one pie marker per aggregated location, a click tool
/// that captures candidate coordinates (last click wins), base-layer
/// switching, a fullscreen toggle and the fixed day legend.
#[component]
pub fn MarketMapRenderer(
    rows: Vec<MarketRecord>,
    captured: RwSignal<Option<(f64, f64)>>,
    width: u32,
    height: u32,
) -> impl IntoView {
    let center = table_center(&rows).unwrap_or(DEFAULT_CENTER);
    let summaries = summarize_locations(&rows);

    let base_layer = RwSignal::new(BaseLayer::Blanco);
    let container_ref: NodeRef<Div> = NodeRef::new();

    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    // The last clicked point becomes the candidate coordinate pair.
    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };

        let cb: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(move |event: Event| {
            let Ok(latlng) =
                web_sys::js_sys::Reflect::get(event.as_ref(), &JsValue::from_str("latlng"))
            else {
                return;
            };
            let lat = web_sys::js_sys::Reflect::get(&latlng, &JsValue::from_str("lat"))
                .ok()
                .and_then(|v| v.as_f64());
            let lng = web_sys::js_sys::Reflect::get(&latlng, &JsValue::from_str("lng"))
                .ok()
                .and_then(|v| v.as_f64());
            if let (Some(lat), Some(lng)) = (lat, lng) {
                captured.set(Some((lat, lng)));
            }
        }));

        let raw_map: &EventTarget = map_instance.unchecked_ref();
        raw_map
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .expect("Failed to attach");

        cb.forget();
    });

    let toggle_fullscreen = move |_ev: web_sys::MouseEvent| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
        } else if let Some(container) = container_ref.get() {
            let _ = container.request_fullscreen();
        }
    };

    view! {
        <div
            class="map-shell"
            style=format!("width: {}px; height: {}px;", width, height)
            node_ref=container_ref
        >
            <MapContainer
                style="height: 100%; width: 100%;"
                center=Position::new(center.0, center.1)
                zoom=12.0
                set_view=true
                map=map.write_only()
            >
                {move || {
                    let layer = base_layer.get();
                    view! {
                        <TileLayer
                            url=layer.url()
                            attribution=layer.attribution()
                        />
                    }
                }}
                {summaries.into_iter().map(|location| {
                    view! { <MarketMarker location=location /> }
                }).collect_view()}
                {move || captured.get().map(|(lat, lon)| view! {
                    <Marker
                        position=Position::new(lat, lon)
                        draggable=false
                        icon_url=Some(CAPTURE_ICON.to_string())
                        icon_size=Some((20.0, 20.0))
                        icon_anchor=Some((10.0, 10.0))
                    >
                        <Popup>
                            <div>{format!("{:.6}, {:.6}", lat, lon)}</div>
                        </Popup>
                    </Marker>
                })}
            </MapContainer>

            <button class="fullscreen-button" title="Pantalla completa" on:click=toggle_fullscreen>
                "⛶"
            </button>

            <div class="layer-picker">
                {BaseLayer::ALL.iter().map(|layer| {
                    let layer = *layer;
                    view! {
                        <label class="layer-option">
                            <input
                                type="radio"
                                name="base-layer"
                                checked=move || base_layer.get() == layer
                                on:change=move |_| base_layer.set(layer)
                            />
                            {layer.label()}
                        </label>
                    }
                }).collect_view()}
            </div>

            <MapLegend />
        </div>
    }
}

/// Fixed overlay mapping the day palette to capitalized day names.
#[component]
pub fn MapLegend() -> impl IntoView {
    view! {
        <div class="map-legend">
            <b class="map-legend-title">"Días de la semana"</b><br/>
            {DAY_COLORS.iter().map(|(dia, color)| {
                view! {
                    <span
                        class="legend-swatch"
                        style=format!("background: {};", color)
                    ></span>
                    {dia.label()}
                    <br/>
                }
            }).collect_view()}
        </div>
    }
}
