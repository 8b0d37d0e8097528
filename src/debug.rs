use crate::math::Point2d;
use crate::util::Interval;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

#[allow(unused)]
pub fn debug_point(name: &str, point: Point2d) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "point",
            "name": name,
            "pos": [point.x, point.y],
        }))
    })
}

#[allow(unused)]
pub fn debug_bracket(name: &str, bracket: Interval<f64>) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "bracket",
            "name": name,
            "min": bracket.min,
            "max": bracket.max,
        }))
    })
}

/// Takes everything recorded on this thread since the last call.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}

#[cfg(all(test, feature = "debug"))]
mod test {
    use super::*;

    #[test]
    fn frame_is_taken_once() {
        debug_bracket("bracket", Interval::new(1.0, 2.0));
        debug_point("closest", Point2d::new(3.0, 4.0));
        let frame = take_debug_frame();
        assert_eq!(frame[0]["max"], 2.0);
        assert_eq!(frame[1]["pos"][1], 4.0);
        assert_eq!(take_debug_frame(), serde_json::json!([]));
    }
}
