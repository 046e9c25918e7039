use crate::constants::prompts::{DEFAULT_QUESTION_COUNT, OUTPUT_CONTRACT, RESTRICTED_MODE_MIN_CHARS};

/// Builds the generation prompt. Pure function of its inputs.
///
/// Restricted mode (reference text longer than the threshold) forbids any
/// knowledge outside the supplied text and treats the topic as a soft
/// filter; open mode generates freely from domain knowledge on the topic.
/// Both modes end with the same JSON-only output contract.
pub fn build_prompt(
    topic: Option<&str>,
    question_count: Option<i16>,
    reference_text: Option<&str>,
) -> String {
    let count = normalize_question_count(question_count);

    let instructions = match reference_text {
        Some(text) if text.chars().count() > RESTRICTED_MODE_MIN_CHARS => {
            restricted_instructions(topic, count, text)
        }
        _ => open_instructions(topic, count),
    };

    format!("{}\n\n{}", instructions, OUTPUT_CONTRACT)
}

fn normalize_question_count(question_count: Option<i16>) -> u16 {
    match question_count {
        Some(count) if count > 0 => count as u16,
        _ => DEFAULT_QUESTION_COUNT,
    }
}

fn restricted_instructions(topic: Option<&str>, count: u16, reference_text: &str) -> String {
    let topic_keyword = match topic {
        Some(t) if !t.trim().is_empty() => t,
        _ => "無",
    };

    format!(
        r#"你現在是一個「嚴格的閱讀測驗出題機器」。

【任務目標】：
請根據下方【指定文章】，出一份 {count} 題的單選題。

【指定文章內容】：
"""
{reference_text}
"""

【出題鐵律 (必須遵守)】：
1. ⚠️ **絕對禁止** 使用任何文章以外的外部知識。即使你知道更多背景，也**不准寫出來**。
2. 題目必須只能從文章裡的資訊找到答案。
3. 如果使用者有提供主題關鍵字：「{topic_keyword}」，請優先出與該關鍵字相關的段落；但如果文章裡沒提到該關鍵字，請**忽略關鍵字**，直接針對文章重點出題。
4. 選項 (Options) 必須包含一個正確答案和三個錯誤答案。"#
    )
}

fn open_instructions(topic: Option<&str>, count: u16) -> String {
    let topic = topic.unwrap_or("");
    format!("你是一個專業教師。請根據主題「{topic}」運用你的專業知識，出 {count} 題單選題。")
}
