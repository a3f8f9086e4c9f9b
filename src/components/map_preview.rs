use crate::model::TreasureHunt;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapPreviewProps {
    pub hunt: TreasureHunt,
    #[prop_or_default]
    pub class: Classes,
}

pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:.4}, {:.4}", latitude, longitude)
}

/// Stands in for the hunt photo: a stylised map with a marker on the
/// starting point.
#[function_component(MapPreviewComp)]
pub fn map_preview_comp(props: &MapPreviewProps) -> Html {
    let location = &props.hunt.location;

    html! {
        <div
            class={classes!("treasure-hunt-map", props.class.clone())}
            title={location.address.clone()}
        >
            <div class="treasure-hunt-map__grid"></div>
            <div class="treasure-hunt-map__marker">
                <i class="fas fa-location-dot"></i>
            </div>
            <div class="treasure-hunt-map__caption">
                <span class="treasure-hunt-map__address">{&location.address}</span>
                {match location.coordinates() {
                    Some((latitude, longitude)) => html! {
                        <span class="treasure-hunt-map__coordinates">
                            {format_coordinates(latitude, longitude)}
                        </span>
                    },
                    None => html! {},
                }}
            </div>
        </div>
    }
}
