//! Export/Import bridge between the greeting module and its browser host.
//!
//! One function is exported to the host (`Greeting`) and one is imported
//! from it (the page address provider in `main.js`). Both calls are plain
//! synchronous foreign calls; there is no handshake or session beyond the
//! bindings declared here at load time.

use greeting::{greet, startup_lines, HrefSource};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::console;

#[wasm_bindgen(raw_module = "main.js")]
extern "C" {
    /// Address provider supplied by the host at load time. The name/module
    /// string pair is the whole contract; the host's implementation is not
    /// validated, and a throw on the host side surfaces here as `Err`.
    #[wasm_bindgen(catch, js_name = "window.location.href")]
    fn host_href() -> Result<String, JsValue>;
}

/// Host-backed implementation of the module's required capability.
struct HostLocation;

impl HrefSource for HostLocation {
    type Error = JsValue;

    fn href(&self) -> Result<String, JsValue> {
        host_href()
    }
}

/// Host-callable entry point, invoked with the startup argument sequence.
///
/// Writes the fixed banner and the space-joined arguments to the console,
/// then reports a success exit status. The host calls this explicitly
/// instead of relying on an implicit start function so the argument
/// sequence can be passed in.
#[wasm_bindgen]
pub fn main(args: Array) -> i32 {
    console_error_panic_hook::set_once();

    let args: Vec<String> = args.iter().filter_map(|v| v.as_string()).collect();
    for line in startup_lines(&args) {
        console::log_1(&line.into());
    }
    0
}

/// Builds the greeting fragment around the host-provided page address.
///
/// Logs the fragment to the console and returns it to the caller. The
/// address is fetched fresh on every call. A failed host call is rethrown
/// to the caller unhandled; there is no retry and no fallback value.
#[wasm_bindgen(js_name = Greeting)]
pub fn greeting() -> Result<String, JsValue> {
    let text = greet(&HostLocation)?;
    console::log_1(&text.as_str().into());
    Ok(text)
}
