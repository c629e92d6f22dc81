//! # Greeting - template and host capability contract
//!
//! This crate holds the platform-independent half of the browser greeting
//! demo: the HTML greeting template, the capability the module requires from
//! its host (an address provider), and the two startup output lines.
//!
//! The browser-facing `client` crate wires [`HrefSource`] to a JavaScript
//! import and re-exports [`greet`] to the host; the native `cli` binary
//! reuses [`startup_lines`] for its process entry. Keeping this logic here
//! lets every observable behavior be unit tested without a browser.
//!
//! ## Failure model
//!
//! The host-side address provider is the only thing that can fail, and its
//! failures are opaque to this crate: [`HrefSource`] carries an associated
//! error type and [`greet`] propagates it untouched. There is no retry and
//! no fallback value - a failed host call means no greeting.
//!
//! ## Example
//!
//! ```
//! use greeting::{greet, HrefSource};
//!
//! struct Fixed;
//!
//! impl HrefSource for Fixed {
//!     type Error = std::convert::Infallible;
//!     fn href(&self) -> Result<String, Self::Error> {
//!         Ok("https://localhost:8080/".to_string())
//!     }
//! }
//!
//! let html = greet(&Fixed).unwrap();
//! assert!(html.contains("https://localhost:8080/"));
//! ```

/// Headline embedded in every greeting payload.
pub const GREETING_HEADLINE: &str = "Hello, World! Greetings from WASM!";

/// First line written by the process entry.
pub const STARTUP_BANNER: &str = "Hello, Browser!";

/// The capability the module requires from its host: a synchronous provider
/// of the current page address.
///
/// Each side of the bridge has exactly one implementation, so callers take
/// `impl HrefSource` and no dynamic dispatch is involved. The associated
/// `Error` keeps host failures opaque; implementations decide what a failed
/// host call looks like and [`greet`] just passes it through.
pub trait HrefSource {
    type Error;

    /// Returns the current page address. Blocking, one call per invocation,
    /// never cached by the caller.
    fn href(&self) -> Result<String, Self::Error>;
}

/// Fills the fixed HTML template with a page address.
///
/// The address is embedded verbatim, no escaping. The fragment has no
/// trailing newline.
pub fn render_html(href: &str) -> String {
    format!(
        "<div>\n    <h1>{GREETING_HEADLINE}</h1>\n    <p>Listening at {href}</p>\n</div>"
    )
}

/// Produces the greeting payload for one call.
///
/// Asks `source` for the address every time - no caching or memoization
/// across calls - and renders it into the template. A source error
/// propagates to the caller unhandled; this is intentional fail-fast
/// behavior, not an oversight.
pub fn greet<S: HrefSource>(source: &S) -> Result<String, S::Error> {
    let href = source.href()?;
    Ok(render_html(&href))
}

/// The two lines written at process entry: the fixed banner, then the
/// startup arguments joined by single spaces in the order received.
///
/// An empty argument sequence yields an empty second line.
pub fn startup_lines(args: &[String]) -> [String; 2] {
    [STARTUP_BANNER.to_string(), args.join(" ")]
}
