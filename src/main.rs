use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use js_sys::Date;
use web_sys::{DragEvent, MouseEvent};
use yew::prelude::*;

use eawase_core::{
    format_clock, tile_region, BackgroundImage, EngineEvent, Placement, PuzzleEngine, TileId,
    COLS, ROUND_SECONDS, ROWS, TOTAL,
};

mod persisted;

const ROUND_SEED_BASE: u32 = 0x0EA_A5E0;

const BACKGROUND_CATALOG: &[BackgroundImage] = &[
    BackgroundImage {
        label: "Eawase logo",
        slug: "eawase-logo",
        src: "assets/eawase-logo.png",
    },
    BackgroundImage {
        label: "Hana",
        slug: "hana",
        src: "assets/hana.jpg",
    },
    BackgroundImage {
        label: "Umi",
        slug: "umi",
        src: "assets/umi.jpg",
    },
    BackgroundImage {
        label: "Yama",
        slug: "yama",
        src: "assets/yama.jpg",
    },
    BackgroundImage {
        label: "Sora",
        slug: "sora",
        src: "assets/sora.jpg",
    },
];

fn round_seed(now_ms: u32, nonce: u32) -> u32 {
    ROUND_SEED_BASE ^ now_ms ^ nonce.wrapping_mul(0x9E37_79B9)
}

fn tile_background_style(src: &str, id: TileId) -> String {
    let (x, y) = tile_region(id);
    format!(
        "background-image: url('{}'); background-size: {}% {}%; background-position: {:.0}% {:.0}%;",
        src,
        COLS * 100,
        ROWS * 100,
        x * 100.0,
        y * 100.0
    )
}

#[derive(Clone, PartialEq)]
struct Notice {
    title: &'static str,
    detail: String,
}

#[derive(Clone)]
struct ViewHandles {
    placement: UseStateHandle<Placement>,
    selected: UseStateHandle<Option<usize>>,
    clock_label: UseStateHandle<String>,
    best_label: UseStateHandle<String>,
    notice: UseStateHandle<Option<Notice>>,
}

impl ViewHandles {
    fn apply(&self, events: Vec<EngineEvent>) {
        for event in events {
            match event {
                EngineEvent::PlacementChanged(placement) => self.placement.set(placement),
                EngineEvent::TileSelected(position) => self.selected.set(Some(position)),
                EngineEvent::TileDeselected(_) => self.selected.set(None),
                EngineEvent::TimerTick(label) => self.clock_label.set(label),
                EngineEvent::TimeExpired => self.notice.set(Some(Notice {
                    title: "Time up",
                    detail: "Play again".to_string(),
                })),
                EngineEvent::Won(time_label) => self.notice.set(Some(Notice {
                    title: "You won",
                    detail: format!("Completed in {}", time_label),
                })),
                EngineEvent::BestTimeUpdated(seconds) => {
                    persisted::save_best_time(seconds);
                    self.best_label.set(format_clock(seconds));
                }
            }
        }
    }
}

fn start_round(
    engine: &Rc<RefCell<PuzzleEngine>>,
    view: &ViewHandles,
    background_src: &UseStateHandle<String>,
    tick_handle: &Rc<RefCell<Option<Interval>>>,
    round_nonce: &Rc<RefCell<u32>>,
) {
    let nonce = {
        let mut slot = round_nonce.borrow_mut();
        *slot = slot.wrapping_add(1);
        *slot
    };
    let seed = round_seed(Date::now() as u64 as u32, nonce);
    gloo::console::log!("round start", seed);
    let (events, generation) = {
        let mut engine = engine.borrow_mut();
        let events = engine.initialize(seed);
        (events, engine.timer_generation())
    };
    if let Some(background) = engine.borrow().background() {
        background_src.set(background.src.to_string());
    }
    view.selected.set(None);
    view.notice.set(None);
    view.apply(events);

    // Dropping the previous interval cancels it; the generation check in the
    // engine catches any tick already in flight.
    let interval = {
        let engine = engine.clone();
        let view = view.clone();
        Interval::new(1_000, move || {
            let events = engine.borrow_mut().tick(generation);
            view.apply(events);
        })
    };
    *tick_handle.borrow_mut() = Some(interval);
}

#[function_component(App)]
fn app() -> Html {
    let engine =
        use_mut_ref(|| PuzzleEngine::new(BACKGROUND_CATALOG, persisted::load_best_time()));
    let placement = use_state(Placement::solved);
    let selected = use_state(|| None::<usize>);
    let clock_label = use_state(|| format_clock(ROUND_SECONDS));
    let best_label = use_state(|| engine.borrow().best().label());
    let background_src = use_state(String::new);
    let notice = use_state(|| None::<Notice>);
    let tick_handle = use_mut_ref(|| None::<Interval>);
    let round_nonce = use_mut_ref(|| 0u32);
    let drag_from = use_mut_ref(|| None::<usize>);

    let view = ViewHandles {
        placement: placement.clone(),
        selected: selected.clone(),
        clock_label: clock_label.clone(),
        best_label: best_label.clone(),
        notice: notice.clone(),
    };

    {
        let engine = engine.clone();
        let view = view.clone();
        let background_src = background_src.clone();
        let tick_handle = tick_handle.clone();
        let round_nonce = round_nonce.clone();
        use_effect_with((), move |_| {
            start_round(&engine, &view, &background_src, &tick_handle, &round_nonce);
            || ()
        });
    }

    let on_play_again = {
        let engine = engine.clone();
        let view = view.clone();
        let background_src = background_src.clone();
        let tick_handle = tick_handle.clone();
        let round_nonce = round_nonce.clone();
        Callback::from(move |_: MouseEvent| {
            start_round(&engine, &view, &background_src, &tick_handle, &round_nonce);
        })
    };

    let placement_value = *placement;
    let selected_value = *selected;
    let background_value = (*background_src).clone();

    let tiles: Html = (0..TOTAL)
        .map(|position| {
            let id = placement_value.tile_at(position).unwrap_or(position);
            let style = tile_background_style(&background_value, id);
            let class = if selected_value == Some(position) {
                "tile selected"
            } else {
                "tile"
            };
            let onclick = {
                let engine = engine.clone();
                let view = view.clone();
                Callback::from(move |_: MouseEvent| {
                    let events = engine.borrow_mut().select_or_swap(position);
                    view.apply(events);
                })
            };
            let ondragstart = {
                let drag_from = drag_from.clone();
                Callback::from(move |_: DragEvent| {
                    *drag_from.borrow_mut() = Some(position);
                })
            };
            let ondragover = Callback::from(|event: DragEvent| event.prevent_default());
            let ondrop = {
                let engine = engine.clone();
                let view = view.clone();
                let drag_from = drag_from.clone();
                Callback::from(move |event: DragEvent| {
                    event.prevent_default();
                    let Some(source) = drag_from.borrow_mut().take() else {
                        return;
                    };
                    let events = engine.borrow_mut().swap(source, position);
                    view.apply(events);
                })
            };
            html! {
                <div
                    key={position}
                    {class}
                    {style}
                    draggable="true"
                    {onclick}
                    {ondragstart}
                    {ondragover}
                    {ondrop}
                ></div>
            }
        })
        .collect();

    let notice_view = if let Some(notice_value) = (*notice).clone() {
        html! {
            <div class="overlay">
                <div class="modal">
                    <h2>{ notice_value.title }</h2>
                    <p>{ notice_value.detail }</p>
                    <button onclick={on_play_again.clone()}>{ "Play again" }</button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <main class="app">
            <header class="status-bar">
                <h1>{ "eawase" }</h1>
                <span class="clock">{ (*clock_label).clone() }</span>
                <span class="best">{ format!("Best: {}", *best_label) }</span>
            </header>
            <div class="board">{ tiles }</div>
            { notice_view }
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_seed_varies_with_the_nonce() {
        assert_eq!(round_seed(1000, 1), round_seed(1000, 1));
        assert_ne!(round_seed(1000, 1), round_seed(1000, 2));
        assert_ne!(round_seed(1000, 1), round_seed(2000, 1));
    }

    #[test]
    fn tile_style_slices_the_source_image() {
        let style = tile_background_style("assets/umi.jpg", 4);
        assert!(style.contains("url('assets/umi.jpg')"));
        assert!(style.contains("background-size: 300% 300%"));
        assert!(style.contains("background-position: 50% 50%"));
    }

    #[test]
    fn corner_tiles_pin_to_the_image_edges() {
        assert!(tile_background_style("a.png", 0).contains("background-position: 0% 0%"));
        assert!(tile_background_style("a.png", 8).contains("background-position: 100% 100%"));
    }
}
