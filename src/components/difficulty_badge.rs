use crate::model::Difficulty;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DifficultyBadgeProps {
    pub difficulty: Difficulty,
}

#[function_component(DifficultyBadgeComp)]
pub fn difficulty_badge_comp(props: &DifficultyBadgeProps) -> Html {
    html! {
        <span class={classes!(
            "treasure-hunt-badge",
            "treasure-hunt-badge--difficulty",
            "bg-gradient-to-r",
            props.difficulty.gradient()
        )}>
            {props.difficulty.label()}
        </span>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RatingBadgeProps {
    pub rating: f32,
}

#[function_component(RatingBadgeComp)]
pub fn rating_badge_comp(props: &RatingBadgeProps) -> Html {
    html! {
        <div class="treasure-hunt-badge treasure-hunt-badge--rating">
            <i class="fas fa-star treasure-hunt-badge__icon"></i>
            <span class="treasure-hunt-badge__value">{props.rating.to_string()}</span>
        </div>
    }
}
