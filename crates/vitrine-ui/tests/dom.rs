//! Browser-side tests for timer behavior and the tooltip lifecycle.
//! Run with `wasm-pack test --headless --chrome crates/vitrine-ui`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use vitrine_ui::{Debounced, Throttled, show_tooltip};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn debounce_fires_once_with_last_arguments() {
    let count = Rc::new(Cell::new(0_u32));
    let seen = Rc::new(Cell::new(0_i32));

    let debounced = Debounced::new(Duration::from_millis(50), {
        let count = Rc::clone(&count);
        let seen = Rc::clone(&seen);
        move |arg: i32| {
            count.set(count.get() + 1);
            seen.set(arg);
        }
    });

    debounced.call(1);
    debounced.call(2);
    debounced.call(3);
    assert!(debounced.is_pending());

    sleep(150).await;
    assert_eq!(count.get(), 1);
    assert_eq!(seen.get(), 3);
    assert!(!debounced.is_pending());
}

#[wasm_bindgen_test]
async fn debounce_cancel_drops_pending_call() {
    let count = Rc::new(Cell::new(0_u32));
    let debounced = Debounced::new(Duration::from_millis(30), {
        let count = Rc::clone(&count);
        move |_: ()| count.set(count.get() + 1)
    });

    debounced.call(());
    debounced.cancel();
    sleep(100).await;
    assert_eq!(count.get(), 0);
}

#[wasm_bindgen_test]
async fn throttle_is_leading_edge() {
    let count = Rc::new(Cell::new(0_u32));
    let throttled = Throttled::new(100.0, {
        let count = Rc::clone(&count);
        move |_: ()| count.set(count.get() + 1)
    });

    for _ in 0..10 {
        throttled.call(());
    }
    assert_eq!(count.get(), 1);

    sleep(150).await;
    throttled.call(());
    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
async fn tooltip_preempts_previous() {
    show_tooltip("a");
    show_tooltip("b");

    let document = web_sys::window().unwrap().document().unwrap();
    let nodes = document.query_selector_all(".tooltip").unwrap();
    assert_eq!(nodes.length(), 1);
    assert_eq!(nodes.item(0).unwrap().text_content().unwrap(), "b");
}

#[wasm_bindgen_test]
async fn tooltip_is_removed_after_fade_out() {
    show_tooltip("transient");

    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document.query_selector(".tooltip").unwrap().is_some());

    sleep(2500).await;
    assert!(document.query_selector(".tooltip").unwrap().is_none());
}
