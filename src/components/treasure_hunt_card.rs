use super::{DifficultyBadgeComp, MapPreviewComp, RatingBadgeComp};
use crate::model::TreasureHunt;
use yew::prelude::*;

pub const FULL_LABEL: &str = "Complet";
pub const JOIN_LABEL: &str = "Rejoindre l'aventure";

#[derive(Properties, PartialEq, Clone)]
pub struct TreasureHuntCardProps {
    pub hunt: TreasureHunt,
    pub on_join: Callback<()>,
}

pub fn join_label(hunt: &TreasureHunt) -> &'static str {
    if hunt.is_full() {
        FULL_LABEL
    } else {
        JOIN_LABEL
    }
}

/// Forwards a join activation to `on_join` unless the hunt is full.
/// Returns whether the callback fired.
pub fn activate_join(hunt: &TreasureHunt, on_join: &Callback<()>) -> bool {
    if hunt.is_full() {
        log::warn!("Join ignored, {} is full", hunt.title);
        return false;
    }
    log::debug!("Joining {}", hunt.title);
    on_join.emit(());
    true
}

#[function_component(TreasureHuntCardComp)]
pub fn treasure_hunt_card_comp(props: &TreasureHuntCardProps) -> Html {
    let hunt = &props.hunt;
    let is_full = hunt.is_full();

    let onclick = {
        let hunt = hunt.clone();
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| {
            activate_join(&hunt, &on_join);
        })
    };

    html! {
        <div class="treasure-hunt-card">
            <div class="treasure-hunt-card__media">
                {match &hunt.image {
                    Some(image) => html! {
                        <img
                            class="treasure-hunt-card__image"
                            src={image.clone()}
                            alt={hunt.title.clone()}
                        />
                    },
                    None => html! {
                        <MapPreviewComp
                            hunt={hunt.clone()}
                            class={classes!("treasure-hunt-card__image")}
                        />
                    },
                }}
                <div class="treasure-hunt-card__shade"></div>
                <div class="treasure-hunt-card__difficulty">
                    <DifficultyBadgeComp difficulty={hunt.difficulty.clone()} />
                </div>
                <div class="treasure-hunt-card__category">
                    <span class="treasure-hunt-badge">{&hunt.category}</span>
                </div>
                if hunt.shows_rating() {
                    <div class="treasure-hunt-card__rating">
                        <RatingBadgeComp rating={hunt.rating} />
                    </div>
                }
            </div>

            <div class="treasure-hunt-card__body">
                <h3 class="treasure-hunt-card__title">{&hunt.title}</h3>
                <p class="treasure-hunt-card__description">{&hunt.description}</p>

                <div class="treasure-hunt-card__location">
                    <i class="fas fa-location-dot treasure-hunt-card__icon"></i>
                    <span>{&hunt.location.address}</span>
                </div>

                <div class="treasure-hunt-card__stats">
                    <span class="treasure-hunt-card__duration">
                        <i class="fas fa-clock treasure-hunt-card__icon"></i>
                        {format!("{}min", hunt.duration)}
                    </span>
                    <span class={classes!("treasure-hunt-card__participants", is_full.then(|| "full"))}>
                        <i class="fas fa-users treasure-hunt-card__icon"></i>
                        {format!("{}/{}", hunt.participants, hunt.max_participants)}
                    </span>
                    <span class="treasure-hunt-card__rewards">
                        <i class="fas fa-trophy treasure-hunt-card__icon"></i>
                        {hunt.reward_total().to_string()}
                    </span>
                </div>

                <button
                    class="treasure-hunt-card__join"
                    disabled={is_full}
                    {onclick}
                >
                    if !is_full {
                        <i class="fas fa-bolt treasure-hunt-card__icon"></i>
                    }
                    <span>{join_label(hunt)}</span>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Location, Reward};
    use std::cell::Cell;
    use std::rc::Rc;

    fn hunt(participants: u32, max_participants: u32) -> TreasureHunt {
        let mut hunt = TreasureHunt::new(
            "Les secrets du Mont-Saint-Michel",
            Difficulty::Hard,
            Location::new("Grande Rue, Le Mont-Saint-Michel"),
        );
        hunt.participants = participants;
        hunt.max_participants = max_participants;
        hunt.rewards = vec![Reward::new("Médaille", 10.0), Reward::new("Points", 5.0)];
        hunt
    }

    fn counting_callback() -> (Callback<()>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (callback, count)
    }

    #[test]
    fn full_hunt_shows_complet() {
        let hunt = hunt(5, 5);
        assert!(hunt.is_full());
        assert_eq!(join_label(&hunt), "Complet");
    }

    #[test]
    fn open_hunt_invites_to_join() {
        assert_eq!(join_label(&hunt(4, 5)), "Rejoindre l'aventure");
    }

    #[test]
    fn join_fires_once_per_activation() {
        let (on_join, count) = counting_callback();
        let hunt = hunt(2, 5);

        assert!(activate_join(&hunt, &on_join));
        assert_eq!(count.get(), 1);
        assert!(activate_join(&hunt, &on_join));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn join_is_ignored_when_full() {
        let (on_join, count) = counting_callback();

        assert!(!activate_join(&hunt(5, 5), &on_join));
        assert!(!activate_join(&hunt(6, 5), &on_join));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn card_props() {
        let (on_join, _) = counting_callback();
        let hunt = hunt(1, 5);

        let props = yew::props!(TreasureHuntCardProps {
            hunt,
            on_join,
        });

        assert_eq!(props.hunt.reward_total(), 15.0);
        assert_eq!(props.hunt.image, None);
    }
}
