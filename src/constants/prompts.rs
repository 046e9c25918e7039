/// Reserved answer choice a respondent selects to explicitly skip a
/// question. Graded as Blank even when it equals the correct answer text.
pub const SKIP_SENTINEL: &str = "這題我不會";

/// Reference text longer than this (in chars) switches generation into
/// restricted mode; at or below it, open mode.
pub const RESTRICTED_MODE_MIN_CHARS: usize = 50;

/// Extracted documents shorter than this are treated as unreadable.
pub const EXTRACTION_MIN_CHARS: usize = 10;

/// Question count used when the request omits one or supplies a
/// non-positive value.
pub const DEFAULT_QUESTION_COUNT: u16 = 5;

/// Generated questions matching this pattern are dropped before the answer
/// key is built. Guards against malformed generations that ask the
/// respondent to re-enter contact info the host already collects.
pub const EMAIL_QUESTION_PATTERN: &str = r"(?i)電子郵件|email";

/// Output contract appended to every generation prompt, both modes.
/// The model must answer with a bare JSON array in Traditional Chinese.
pub const OUTPUT_CONTRACT: &str = r#"【嚴格回傳格式 (JSON Only)】：
1. 請直接回傳 JSON Array，不要 Markdown，不要前言後語。
2. 語言：繁體中文 (台灣用語)。
3. 結構範例：[{"question":"...","options":["..."],"answerIndex":0,"explanation":"...","points":1}]"#;
