/// Inline display math `$$...$$` with owned delimiter constants.
///
/// The body must be non-empty and may not contain a `$`.
pub struct InlineMath;

impl InlineMath {
    pub const DELIMITER: &'static [u8; 2] = b"$$";
    pub const DOLLAR: u8 = b'$';
}
