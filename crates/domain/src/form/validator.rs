//! # フォームバリデータ
//!
//! 送信ペイロードをスキーマに照らして検証する。
//!
//! ## 検証ルール
//!
//! 1. 必須フィールドが未指定または空文字列 → `<field> is required`
//! 2. 値が制約を満たさない → `<field> is invalid`
//! 3. 任意フィールドが未指定なら制約は検証せず、結果からも除外する
//!
//! 必須フィールドが未指定の場合は 1 のエラーのみを報告する。
//! エラーはスキーマの宣言順にすべて蓄積して返す（fail-fast しない）。

use serde::{Deserialize, Serialize};

use super::{FormSchema, SubmissionPayload, ValidatedField, ValidatedSubmission};

/// 1 フィールド分の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// エラーが発生したフィールド名
    pub field:   String,
    /// エラーメッセージ
    pub message: String,
}

impl ValidationError {
    fn required(field: &str) -> Self {
        Self {
            field:   field.to_string(),
            message: format!("{field} is required"),
        }
    }

    fn invalid(field: &str) -> Self {
        Self {
            field:   field.to_string(),
            message: format!("{field} is invalid"),
        }
    }
}

/// ペイロードをスキーマで検証する
///
/// スキーマにないキーは無視する。値はトリムせず、受信したまま検証・保持する。
pub fn validate(
    payload: &SubmissionPayload,
    schema: &FormSchema,
) -> Result<ValidatedSubmission, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut fields = Vec::new();

    for spec in schema.fields() {
        let Some(value) = payload.get(spec.name) else {
            if spec.required {
                errors.push(ValidationError::required(spec.name));
            }
            continue;
        };

        if spec
            .constraint
            .is_some_and(|constraint| !constraint.is_satisfied_by(value))
        {
            errors.push(ValidationError::invalid(spec.name));
            continue;
        }

        fields.push(ValidatedField {
            name:  spec.name,
            label: spec.label,
            value: value.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(ValidatedSubmission::new(fields))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::form::{FormKind, FormSchemas, SchemaOptions};

    fn schemas() -> FormSchemas {
        FormSchemas::new(SchemaOptions::default()).unwrap()
    }

    fn valid_contact() -> Vec<(&'static str, &'static str)> {
        vec![
            ("firstName", "Aiko"),
            ("email", "aiko@example.com"),
            ("message", "Hello"),
        ]
    }

    fn full_internship() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Ravi"),
            ("email", "ravi@example.com"),
            ("phone", "9876543210"),
            ("college", "IIT"),
            ("duration", "3 months"),
            ("interest", "Backend"),
        ]
    }

    // =========================================================================
    // 必須フィールド
    // =========================================================================

    #[test]
    fn test_必須フィールドが揃えば成功し値は受信したまま() {
        let payload = SubmissionPayload::from_pairs(full_internship());

        let submission = validate(&payload, schemas().get(FormKind::Internship)).unwrap();

        for (name, value) in full_internship() {
            assert_eq!(submission.get(name), Some(value));
        }
    }

    #[test]
    fn test_空のペイロードはすべての必須フィールドを報告する() {
        let payload = SubmissionPayload::default();

        let errors = validate(&payload, schemas().get(FormKind::ProjectInquiry)).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::required("name"),
                ValidationError::required("email"),
                ValidationError::required("requirements"),
            ]
        );
    }

    #[rstest]
    #[case("name")]
    #[case("email")]
    #[case("phone")]
    #[case("college")]
    #[case("interest")]
    fn test_必須フィールドが欠けると検証エラー(#[case] missing: &str) {
        let payload = SubmissionPayload::from_pairs(
            full_internship()
                .into_iter()
                .filter(|(name, _)| *name != missing),
        );

        let errors = validate(&payload, schemas().get(FormKind::Internship)).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, missing);
        assert_eq!(errors[0].message, format!("{missing} is required"));
    }

    #[test]
    fn test_必須フィールドの空文字列は未指定と同じ扱い() {
        let payload = SubmissionPayload::from_pairs([
            ("name", ""),
            ("email", "aiko@example.com"),
            ("requirements", "A landing page"),
        ]);

        let errors = validate(&payload, schemas().get(FormKind::ProjectInquiry)).unwrap_err();

        assert_eq!(errors, vec![ValidationError::required("name")]);
    }

    #[test]
    fn test_json上の0とfalseは必須フィールドの未指定と同じ扱い() {
        // Given: name が 0、requirements が false
        let payload = SubmissionPayload::from_json_object(
            match json!({"name": 0, "email": "a@b.com", "requirements": false}) {
                serde_json::Value::Object(map) => map,
                other => panic!("オブジェクトではありません: {other}"),
            },
        );

        // When
        let errors = validate(&payload, schemas().get(FormKind::ProjectInquiry)).unwrap_err();

        // Then
        assert_eq!(
            errors,
            vec![
                ValidationError::required("name"),
                ValidationError::required("requirements"),
            ]
        );
    }

    #[test]
    fn test_空白のみの値はトリムせず受け付ける() {
        let payload = SubmissionPayload::from_pairs([
            ("name", "   "),
            ("email", "aiko@example.com"),
            ("requirements", " spaced "),
        ]);

        let submission = validate(&payload, schemas().get(FormKind::ProjectInquiry)).unwrap();

        assert_eq!(submission.get("name"), Some("   "));
        assert_eq!(submission.get("requirements"), Some(" spaced "));
    }

    // =========================================================================
    // 制約
    // =========================================================================

    #[rstest]
    #[case::ten_chars(Some("9876543210"), true)]
    #[case::nine_chars(Some("987654321"), false)]
    #[case::eleven_chars(Some("98765432100"), false)]
    #[case::absent(None, true)]
    #[case::empty(Some(""), true)]
    fn test_contactのphoneは10文字のみ受け付ける(
        #[case] phone: Option<&str>,
        #[case] accepted: bool,
    ) {
        let mut pairs = valid_contact();
        if let Some(phone) = phone {
            pairs.push(("phone", phone));
        }
        let payload = SubmissionPayload::from_pairs(pairs);

        let result = validate(&payload, schemas().get(FormKind::Contact));

        match result {
            Ok(submission) => {
                assert!(accepted, "受け付けられるべきではない: {phone:?}");
                assert_eq!(submission.get("phone"), phone.filter(|p| !p.is_empty()));
            }
            Err(errors) => {
                assert!(!accepted, "拒否されるべきではない: {phone:?}");
                assert_eq!(errors, vec![ValidationError::invalid("phone")]);
            }
        }
    }

    #[test]
    fn test_contactのemailは形式不正で検証エラー() {
        let payload = SubmissionPayload::from_pairs([
            ("firstName", "Aiko"),
            ("email", "not-an-email"),
            ("message", "Hello"),
        ]);

        let errors = validate(&payload, schemas().get(FormKind::Contact)).unwrap_err();

        assert_eq!(errors, vec![ValidationError::invalid("email")]);
    }

    #[test]
    fn test_既定ではinternshipとprojectのemailは形式を問わない() {
        let mut internship = full_internship();
        internship[1] = ("email", "ravi");
        let project = [
            ("name", "Ravi"),
            ("email", "ravi"),
            ("requirements", "A landing page"),
        ];

        let internship = validate(
            &SubmissionPayload::from_pairs(internship),
            schemas().get(FormKind::Internship),
        )
        .unwrap();
        let project = validate(
            &SubmissionPayload::from_pairs(project),
            schemas().get(FormKind::ProjectInquiry),
        )
        .unwrap();

        assert_eq!(internship.get("email"), Some("ravi"));
        assert_eq!(project.get("email"), Some("ravi"));
    }

    #[rstest]
    #[case(FormKind::Internship)]
    #[case(FormKind::ProjectInquiry)]
    fn test_設定を有効にするとinternshipとprojectもemail形式を検証する(
        #[case] kind: FormKind,
    ) {
        let schemas = FormSchemas::new(SchemaOptions {
            email_format_on_all_forms: true,
            ..SchemaOptions::default()
        })
        .unwrap();
        let payload = SubmissionPayload::from_pairs([("email", "not-an-email")]);

        let errors = validate(&payload, schemas.get(kind)).unwrap_err();

        assert!(errors.contains(&ValidationError::invalid("email")));
    }

    #[test]
    fn test_必須フィールド欠落はrequiredのみを報告する() {
        let payload = SubmissionPayload::from_pairs([("firstName", "Aiko"), ("message", "Hi")]);

        let errors = validate(&payload, schemas().get(FormKind::Contact)).unwrap_err();

        assert_eq!(errors, vec![ValidationError::required("email")]);
    }

    #[test]
    fn test_エラーはスキーマ順に蓄積される() {
        let payload = SubmissionPayload::from_pairs([("email", "bad"), ("phone", "123")]);

        let errors = validate(&payload, schemas().get(FormKind::Contact)).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::required("firstName"),
                ValidationError::invalid("email"),
                ValidationError::invalid("phone"),
                ValidationError::required("message"),
            ]
        );
    }

    // =========================================================================
    // 任意フィールド・未知のキー
    // =========================================================================

    #[test]
    fn test_未指定の任意フィールドは結果に含まれない() {
        let payload = SubmissionPayload::from_pairs(valid_contact());

        let submission = validate(&payload, schemas().get(FormKind::Contact)).unwrap();

        let names: Vec<_> = submission.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["firstName", "email", "message"]);
    }

    #[test]
    fn test_スキーマにないキーは無視する() {
        let mut pairs = valid_contact();
        pairs.push(("college", "IIT"));
        let payload = SubmissionPayload::from_pairs(pairs);

        let submission = validate(&payload, schemas().get(FormKind::Contact)).unwrap();

        assert_eq!(submission.get("college"), None);
    }

    #[test]
    fn test_設定でlast_nameを必須にすると欠落が検証エラーになる() {
        let schemas = FormSchemas::new(SchemaOptions {
            contact_last_name_required: true,
            ..SchemaOptions::default()
        })
        .unwrap();
        let payload = SubmissionPayload::from_pairs(valid_contact());

        let errors = validate(&payload, schemas.get(FormKind::Contact)).unwrap_err();

        assert_eq!(errors, vec![ValidationError::required("lastName")]);
    }
}
