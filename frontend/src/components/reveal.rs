use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_AMOUNT;

/// True once at least `amount` (0..=1) of an element whose top sits at `top`
/// with `height` is inside a viewport of `viewport_height`. Coordinates are
/// relative to the viewport, as from `getBoundingClientRect`.
pub fn should_reveal(top: f64, height: f64, viewport_height: f64, amount: f64) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    let bottom = top + height;
    if height <= 0.0 {
        return top >= 0.0 && top <= viewport_height;
    }
    let visible = bottom.min(viewport_height) - top.max(0.0);
    visible > 0.0 && visible / height >= amount.clamp(0.0, 1.0)
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(REVEAL_AMOUNT)]
    pub amount: f64,
}

/// Fades its children in the first time they scroll into view. The flag only
/// ever flips on; nothing outside this component observes it.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);
    {
        let node = node.clone();
        let revealed = revealed.clone();
        let amount = props.amount;
        use_effect_with_deps(
            move |_| {
                let check = move || {
                    if let (Some(element), Some(height)) = (node.cast::<Element>(), viewport_height()) {
                        let rect = element.get_bounding_client_rect();
                        if should_reveal(rect.top(), rect.height(), height, amount) {
                            revealed.set(true);
                        }
                    }
                };
                // Sections already on screen at load
                check();
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let callback = Closure::<dyn Fn()>::new(check);
                        match window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                if let Some(win) = web_sys::window() {
                                    let _ = win.remove_event_listener_with_callback(
                                        "scroll",
                                        callback.as_ref().unchecked_ref(),
                                    );
                                }
                            }),
                            Err(_) => Box::new(|| ()),
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("is-visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_stays_hidden() {
        assert!(!should_reveal(900.0, 400.0, 800.0, 0.3));
    }

    #[test]
    fn reveals_once_enough_is_visible() {
        // 100 of 400 visible
        assert!(!should_reveal(700.0, 400.0, 800.0, 0.3));
        // 200 of 400 visible
        assert!(should_reveal(600.0, 400.0, 800.0, 0.3));
    }

    #[test]
    fn scrolled_past_still_counts_partially_visible() {
        assert!(should_reveal(-250.0, 400.0, 800.0, 0.3));
        assert!(!should_reveal(-500.0, 400.0, 800.0, 0.3));
    }

    #[test]
    fn tall_sections_taller_than_viewport() {
        // 800 of 3000 visible is under 30%
        assert!(!should_reveal(0.0, 3000.0, 800.0, 0.3));
        assert!(should_reveal(0.0, 3000.0, 800.0, 0.2));
    }

    #[test]
    fn degenerate_sizes() {
        assert!(!should_reveal(0.0, 400.0, 0.0, 0.3));
        assert!(should_reveal(100.0, 0.0, 800.0, 0.3));
        assert!(!should_reveal(900.0, 0.0, 800.0, 0.3));
    }
}
