//! Best-time persistence. One localStorage key holding a plain decimal
//! count of seconds; anything unreadable counts as no record and a failed
//! write is dropped without interrupting play.

pub(crate) const BEST_TIME_KEY: &str = "eawase.best";

fn parse_best_time(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load_best_time() -> Option<u32> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(BEST_TIME_KEY).ok()??;
    parse_best_time(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load_best_time() -> Option<u32> {
    None
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn save_best_time(seconds: u32) {
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        gloo::console::log!("best time: storage unavailable");
        return;
    };
    if storage.set_item(BEST_TIME_KEY, &seconds.to_string()).is_err() {
        gloo::console::log!("best time: storage write failed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn save_best_time(_seconds: u32) {}
