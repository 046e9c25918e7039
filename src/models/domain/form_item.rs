use serde::{Deserialize, Serialize};

/// A rendered multiple-choice item definition handed to the form host.
/// The host owns presentation; this struct carries everything it needs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormItem {
    pub item_id: String,
    pub title: String,
    pub choices: Vec<FormChoice>,
    pub points: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_correct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_incorrect: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormChoice {
    pub text: String,
    pub correct: bool,
}

impl FormItem {
    pub fn correct_choice(&self) -> Option<&FormChoice> {
        self.choices.iter().find(|c| c.correct)
    }
}
