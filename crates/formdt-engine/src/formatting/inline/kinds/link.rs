/// Link and image inline type with owned delimiter constants.
///
/// Covers `[text](url)` and `![alt](url)`. The text part may be empty, the
/// url part may not.
pub struct Link;

impl Link {
    pub const IMAGE: u8 = b'!';
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}
