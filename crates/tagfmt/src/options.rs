/// Default output capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Configuration for a formatting call.
///
/// # Examples
///
/// ```rust
/// use tagfmt::{FormatOptions, args, format_with};
///
/// let options = FormatOptions {
///     capacity: 8,
///     ..Default::default()
/// };
/// let out = format_with(&options, "{u32:x} tail", &args![0xdead_beef_u32]);
/// assert_eq!(out.as_bytes(), b"deadbeef");
/// assert!(out.is_truncated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum number of bytes the output buffer holds.
    ///
    /// Bytes written past this limit are dropped for the rest of the call.
    /// Truncation is byte-based and may split a multi-byte character.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`]
    pub capacity: usize,

    /// Whether width-suffixed shorthand kinds are recognized.
    ///
    /// When enabled, `{x8}`..`{X64}` select fixed-width hex, `{b8}`..`{B64}`
    /// select fixed-width binary and `{p8}`..`{P64}` select fixed-width
    /// addresses. Shorthand kinds take no further modifiers.
    ///
    /// # Default
    ///
    /// `false`
    pub legacy_shorthand: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            legacy_shorthand: false,
        }
    }
}
