use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::LocationSummary;

use crate::market::icon::{pie_icon_data_uri, ICON_SIZE};

/// One marker per aggregated location: a pie-chart icon summarizing which
/// days a market runs there, with the colony/street/day popup.
#[component]
pub fn MarketMarker(location: LocationSummary) -> impl IntoView {
    let icon_svg = pie_icon_data_uri(&location.dias);
    let position = Position::new(location.lat, location.lon);

    view! {
        <Marker
            position=position
            draggable=false
            icon_url=Some(icon_svg)
            icon_size=Some((ICON_SIZE, ICON_SIZE))
            icon_anchor=Some((ICON_SIZE / 2.0, ICON_SIZE / 2.0))
        >
            <Popup>
                <MarketMarkerPopup location=location />
            </Popup>
        </Marker>
    }
}

#[component]
pub fn MarketMarkerPopup(location: LocationSummary) -> impl IntoView {
    let dias = location
        .dias
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div style="width: 200px;">
            <b>"COLONIA:"</b><br/>{location.colonia.clone()}<br/><br/>
            <b>"CALLES:"</b><br/>{location.calles.clone()}<br/><br/>
            <b>"DIAS:"</b><br/>{dias}
        </div>
    }
}
