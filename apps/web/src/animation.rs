use std::rc::Rc;
use std::time::Duration;

use ais_dashboard::config::Timings;
use ais_dashboard::controllers::toast;
use ais_dashboard::Scheduler;
use wasm_bindgen::JsValue;
use web_sys::Document;

pub const TOAST_CLASS: &str = "map-toast";
pub const TOAST_FADING_CLASS: &str = "fading";

/// CSS `transition` value for `property`, or `None` for an instant change.
pub fn transition(property: &str, duration: Option<Duration>) -> Option<String> {
    duration.map(|duration| format!("{property} {}s ease", seconds(duration)))
}

pub fn scale(factor: f32) -> String {
    format!("scale({factor})")
}

pub fn opacity(value: f32) -> String {
    value.clamp(0.0, 1.0).to_string()
}

fn seconds(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis % 1000 == 0 {
        (millis / 1000).to_string()
    } else {
        format!("{}", duration.as_secs_f64())
    }
}

/// Appends a success toast to `container_id`, fades it after
/// `toast_visible` and removes it once the fade is over.
pub fn show_toast(
    document: &Document,
    container_id: &str,
    message: &str,
    scheduler: Rc<dyn Scheduler>,
    timings: Timings,
) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(container_id) else {
        log::warn!("no #{container_id} to attach a toast to");
        return Ok(());
    };

    let toast = document.create_element("div")?;
    toast.set_class_name(TOAST_CLASS);
    toast.set_text_content(Some(message));
    container.append_child(&toast)?;

    let fading = toast.clone();
    toast::schedule_dismissal(
        scheduler,
        timings,
        move || {
            if let Err(error) = fading.class_list().add_1(TOAST_FADING_CLASS) {
                log::warn!("toast fade failed: {error:?}");
            }
        },
        move || toast.remove(),
    );
    Ok(())
}
