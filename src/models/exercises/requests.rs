use serde::Deserialize;
use ts_rs::TS;

/// 创建练习请求（整棵树一次提交）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct CreateExerciseRequest {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct QuestionPayload {
    pub text: String,
    pub choices: Vec<ChoicePayload>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ChoicePayload {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// 更新练习元数据请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct UpdateExerciseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// 导入练习请求：AI 生成的原始文本，可能裹着 Markdown 代码栅栏
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ImportExerciseRequest {
    pub raw: String,
}

impl CreateExerciseRequest {
    /// 校验练习树的基本结构
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("练习标题不能为空".to_string());
        }
        if self.questions.is_empty() {
            return Err("练习至少需要一道题目".to_string());
        }
        for (idx, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(format!("第 {} 题题干不能为空", idx + 1));
            }
            if question.choices.len() < 2 {
                return Err(format!("第 {} 题至少需要两个选项", idx + 1));
            }
            if !question.choices.iter().any(|c| c.is_correct) {
                return Err(format!("第 {} 题至少需要一个正确选项", idx + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CreateExerciseRequest {
        CreateExerciseRequest {
            title: "Fractions".to_string(),
            description: None,
            questions: vec![QuestionPayload {
                text: "1/2 + 1/2 = ?".to_string(),
                choices: vec![
                    ChoicePayload {
                        text: "1".to_string(),
                        is_correct: true,
                    },
                    ChoicePayload {
                        text: "2".to_string(),
                        is_correct: false,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_valid_tree() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_questions_rejected() {
        let mut req = sample();
        req.questions.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_no_correct_choice_rejected() {
        let mut req = sample();
        req.questions[0].choices[0].is_correct = false;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_single_choice_rejected() {
        let mut req = sample();
        req.questions[0].choices.truncate(1);
        assert!(req.validate().is_err());
    }
}
