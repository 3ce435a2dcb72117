use leptos::prelude::*;
use shared_types::{DayEntry, NewMarketEntry, TimeOfDay, Weekday};
use thaw::{Button, ButtonAppearance, Input, MessageBar, MessageBarIntent};

use crate::{
    components::{error::ErrorView, loading::LoadingView, DayCheckboxes, DayState, TimePickers},
    market::validate::{check_submission, coordinates_valid},
    server::{fetch_market_table, submit_market_entries},
    views::map::map_renderer::MarketMapRenderer,
};

/// The two page arrangements. They share every behavior except the form
/// arrangement and how strict the submit gate is about the street name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    Wide,
    Column,
}

impl PageLayout {
    fn map_size(&self) -> (u32, u32) {
        match self {
            PageLayout::Wide => (1200, 600),
            PageLayout::Column => (1100, 700),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PageLayout::Wide => "market-page layout-wide",
            PageLayout::Column => "market-page layout-column",
        }
    }
}

#[derive(Clone)]
enum FormNotice {
    Warning(String),
    Success(String),
    Error(String),
}

/// The whole flow on one page: the marker map, the click-captured
/// coordinates, the day/moment form and the submit path.
#[component]
pub fn MarketMapPage(layout: PageLayout, require_street: bool) -> impl IntoView {
    let (map_width, map_height) = layout.map_size();

    let table = Resource::new(|| (), move |_| async move { fetch_market_table().await });

    // Candidate coordinates: the last point clicked on the map.
    let captured = RwSignal::new(None::<(f64, f64)>);
    let lat_text = RwSignal::new(String::new());
    let lon_text = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some((lat, lon)) = captured.get() {
            lat_text.set(format!("{:.6}", lat));
            lon_text.set(format!("{:.6}", lon));
        }
    });

    let calles = RwSignal::new(String::new());
    let days: Vec<DayState> = Weekday::ALL.iter().map(|d| DayState::new(*d)).collect();

    let notice = RwSignal::new(None::<FormNotice>);
    let is_submitting = RwSignal::new(false);

    let submit_action = Action::new(move |entry: &NewMarketEntry| {
        let entry = entry.clone();
        async move { submit_market_entries(entry).await }
    });

    let handle_submit = {
        let days = days.clone();
        move || {
            let entries: Vec<DayEntry> = days
                .iter()
                .filter(|d| d.checked.get())
                .map(|d| DayEntry {
                    dia: d.dia,
                    momento: TimeOfDay::from_label(&d.momento.get()).unwrap_or(TimeOfDay::Manana),
                })
                .collect();

            let (Ok(lat), Ok(lon)) = (
                lat_text.get().trim().parse::<f64>(),
                lon_text.get().trim().parse::<f64>(),
            ) else {
                notice.set(Some(FormNotice::Warning(
                    "⚠️ Las coordenadas capturadas no son válidas.".to_string(),
                )));
                return;
            };

            let entry = NewMarketEntry {
                lat,
                lon,
                calles: calles.get(),
                entries,
            };

            if let Err(block) = check_submission(&entry, require_street) {
                notice.set(Some(FormNotice::Warning(block.message().to_string())));
                return;
            }

            notice.set(None);
            is_submitting.set(true);
            submit_action.dispatch(entry);
        }
    };

    // Surface the write result once it lands.
    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            is_submitting.set(false);
            match result {
                Ok(count) => notice.set(Some(FormNotice::Success(format!(
                    "✅ {} registro(s) guardado(s) correctamente.",
                    count
                )))),
                Err(e) => notice.set(Some(FormNotice::Error(format!(
                    "Error al guardar los registros: {}",
                    e
                )))),
            }
        }
    });

    let is_button_disabled = Memo::new(move |_| {
        !coordinates_valid(&lat_text.get(), &lon_text.get()) || is_submitting.get()
    });

    let any_day_selected = {
        let days = days.clone();
        Memo::new(move |_| days.iter().any(|d| d.checked.get()))
    };

    view! {
        <div class=layout.class()>
            <h1>"Mapa de Tianguis en Mexicali"</h1>

            {move || match table.get() {
                Some(Ok(rows)) => view! {
                    <MarketMapRenderer
                        rows=rows
                        captured=captured
                        width=map_width
                        height=map_height
                    />
                }.into_any(),
                Some(Err(err)) => view! {
                    <ErrorView message=Some(format!("Error al cargar los tianguis: {}", err)) />
                }.into_any(),
                None => view! {
                    <LoadingView message=Some("Cargando tianguis...".to_string()) />
                }.into_any(),
            }}

            <h2>"Registra un nuevo tianguis"</h2>

            <div class="market-form">
                <div class="form-section">
                    <h3>"Coordenadas"</h3>
                    <div class="form-group">
                        <label>"Latitud"</label>
                        <input
                            class="coordinate-input"
                            readonly=true
                            placeholder="Usa la herramienta en el mapa"
                            prop:value=move || lat_text.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"Longitud"</label>
                        <input
                            class="coordinate-input"
                            readonly=true
                            placeholder="Usa la herramienta en el mapa"
                            prop:value=move || lon_text.get()
                        />
                    </div>
                    <h3>"Calle"</h3>
                    <div class="form-group">
                        <label>
                            {if require_street { "Nombre de la calle *" } else { "Nombre de la calle" }}
                        </label>
                        <Input
                            placeholder="Nombre de la calle"
                            value=calles
                        />
                    </div>
                </div>

                <div class="form-section">
                    <h3>"Día(s) de la semana"</h3>
                    <DayCheckboxes days=days.clone() />
                </div>

                <div class="form-section">
                    <Show when=move || any_day_selected.get()>
                        <h3>"Momento del día para cada día seleccionado"</h3>
                        <TimePickers days=days.clone() />
                    </Show>
                </div>
            </div>

            {move || notice.with(|n| n.clone()).map(|n| match n {
                FormNotice::Warning(msg) => view! {
                    <MessageBar intent=MessageBarIntent::Warning>{msg.clone()}</MessageBar>
                }.into_any(),
                FormNotice::Success(msg) => view! {
                    <MessageBar intent=MessageBarIntent::Success>{msg.clone()}</MessageBar>
                }.into_any(),
                FormNotice::Error(msg) => view! {
                    <MessageBar intent=MessageBarIntent::Error>{msg.clone()}</MessageBar>
                }.into_any(),
            })}

            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::from(is_button_disabled)
                    loading=is_submitting
                    on_click=move |_| handle_submit()
                >
                    {move || if is_submitting.get() { "Enviando..." } else { "Enviar datos" }}
                </Button>
            </div>
        </div>
    }
}
