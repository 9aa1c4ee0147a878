//! # フォームスキーマ
//!
//! フォーム種別ごとのフィールド定義（必須・任意・制約）を宣言的に表す。
//!
//! ## フィールド一覧
//!
//! | 種別 | 必須 | 任意・制約 |
//! |------|------|-----------|
//! | contact | firstName, email（形式チェックあり）, message | lastName, phone（指定時は 10 文字） |
//! | internship | name, email, phone, college, interest | duration |
//! | project | name, email, requirements | — |
//!
//! internship / project の `email` は既定では必須チェックのみ。
//! 形式チェックの有無と、`lastName` / `duration` の必須/任意は [`SchemaOptions`] で切り替えられる。

use std::collections::HashSet;

use validator::ValidateEmail;

use super::FormKind;
use crate::DomainError;

/// フィールド値に対する制約
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConstraint {
    /// 文字数がちょうど n であること（バイト数ではなく文字数）
    ExactLength(usize),
    /// 一般的なメールアドレスの形式であること
    Email,
}

impl FieldConstraint {
    /// 値が制約を満たすかどうか
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Self::ExactLength(len) => value.chars().count() == *len,
            Self::Email => value.validate_email(),
        }
    }
}

/// フィールド定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON 上のキー名（例: `firstName`）
    pub name:       &'static str,
    /// 通知メール本文での表示名（例: `First Name`）
    pub label:      &'static str,
    pub required:   bool,
    pub constraint: Option<FieldConstraint>,
}

impl FieldSpec {
    /// 必須フィールドを定義する
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            constraint: None,
        }
    }

    /// 任意フィールドを定義する
    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            constraint: None,
        }
    }

    /// 必須かどうかを外部設定で決めるフィールドを定義する
    pub const fn required_if(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            required,
            constraint: None,
        }
    }

    /// 制約を付与する
    pub const fn with_constraint(mut self, constraint: FieldConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

/// フォームスキーマ
///
/// フィールドの並び順は宣言順で固定され、検証エラーの順序と
/// 通知メール本文の行順はこの順序に従う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// スキーマを作成する
    ///
    /// # エラー
    ///
    /// - フィールドが空の場合は `DomainError::EmptySchema`
    /// - フィールド名が重複している場合は `DomainError::DuplicateField`
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, DomainError> {
        if fields.is_empty() {
            return Err(DomainError::EmptySchema);
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name) {
                return Err(DomainError::DuplicateField(field.name.to_string()));
            }
        }

        Ok(Self { fields })
    }

    /// 宣言順のフィールド定義
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

#[cfg(test)]
impl FormSchema {
    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn required_field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// デプロイごとに切り替えるスキーマ設定
///
/// 過去のフォーム実装の間で必須/任意の扱いが揺れていた項目を、
/// コードではなく設定で決められるようにする。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// お問い合わせの `lastName` を必須にする
    pub contact_last_name_required:   bool,
    /// インターン応募の `duration` を必須にする
    pub internship_duration_required: bool,
    /// インターン応募・プロジェクト相談の `email` にも形式チェックをかける
    pub email_format_on_all_forms:    bool,
}

/// 全フォーム種別のスキーマ
///
/// 起動時に 1 度だけ構築し、以降は読み取り専用で共有する。
#[derive(Debug, Clone)]
pub struct FormSchemas {
    contact:    FormSchema,
    internship: FormSchema,
    project:    FormSchema,
}

impl FormSchemas {
    /// 設定に従って 3 種類のスキーマを構築する
    pub fn new(options: SchemaOptions) -> Result<Self, DomainError> {
        Ok(Self {
            contact:    Self::contact(options)?,
            internship: Self::internship(options)?,
            project:    Self::project(options)?,
        })
    }

    /// 種別に対応するスキーマを返す
    pub fn get(&self, kind: FormKind) -> &FormSchema {
        match kind {
            FormKind::Contact => &self.contact,
            FormKind::Internship => &self.internship,
            FormKind::ProjectInquiry => &self.project,
        }
    }

    fn contact(options: SchemaOptions) -> Result<FormSchema, DomainError> {
        FormSchema::new(vec![
            FieldSpec::required("firstName", "First Name"),
            FieldSpec::required_if("lastName", "Last Name", options.contact_last_name_required),
            FieldSpec::required("email", "Email").with_constraint(FieldConstraint::Email),
            FieldSpec::optional("phone", "Phone")
                .with_constraint(FieldConstraint::ExactLength(10)),
            FieldSpec::required("message", "Message"),
        ])
    }

    fn internship(options: SchemaOptions) -> Result<FormSchema, DomainError> {
        FormSchema::new(vec![
            FieldSpec::required("name", "Name"),
            Self::secondary_email(options),
            FieldSpec::required("phone", "Phone"),
            FieldSpec::required("college", "College"),
            FieldSpec::required_if(
                "duration",
                "Duration",
                options.internship_duration_required,
            ),
            FieldSpec::required("interest", "Interest"),
        ])
    }

    fn project(options: SchemaOptions) -> Result<FormSchema, DomainError> {
        FormSchema::new(vec![
            FieldSpec::required("name", "Name"),
            Self::secondary_email(options),
            FieldSpec::required("requirements", "Project Requirements"),
        ])
    }

    /// internship / project の `email`（既定では形式を問わない）
    fn secondary_email(options: SchemaOptions) -> FieldSpec {
        let email = FieldSpec::required("email", "Email");
        if options.email_format_on_all_forms {
            email.with_constraint(FieldConstraint::Email)
        } else {
            email
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // =========================================================================
    // FieldConstraint のテスト
    // =========================================================================

    #[rstest]
    #[case("1234567890", true)]
    #[case("123456789", false)]
    #[case("12345678901", false)]
    #[case("", false)]
    // 文字数で数える（全角数字 10 文字は 30 バイト）
    #[case("１２３４５６７８９０", true)]
    fn test_exact_lengthは文字数で判定する(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(
            FieldConstraint::ExactLength(10).is_satisfied_by(value),
            expected
        );
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("first.last+tag@example.co.jp", true)]
    #[case("not-an-email", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("", false)]
    fn test_emailはメールアドレス形式を判定する(
        #[case] value: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(FieldConstraint::Email.is_satisfied_by(value), expected);
    }

    // =========================================================================
    // FormSchema のテスト
    // =========================================================================

    #[test]
    fn test_フィールド名の重複はエラー() {
        let result = FormSchema::new(vec![
            FieldSpec::required("email", "Email"),
            FieldSpec::optional("email", "Email (again)"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateField("email".to_string())
        );
    }

    #[test]
    fn test_空のスキーマはエラー() {
        let result = FormSchema::new(vec![]);
        assert_eq!(result.unwrap_err(), DomainError::EmptySchema);
    }

    #[test]
    fn test_fieldで名前からフィールド定義を引ける() {
        let schemas = FormSchemas::new(SchemaOptions::default()).unwrap();
        let phone = schemas.get(FormKind::Contact).field("phone").unwrap();

        assert!(!phone.required);
        assert_eq!(phone.constraint, Some(FieldConstraint::ExactLength(10)));
        assert!(schemas.get(FormKind::Contact).field("college").is_none());
    }

    // =========================================================================
    // FormSchemas のテスト
    // =========================================================================

    #[test]
    fn test_デフォルト設定の必須フィールド() {
        let schemas = FormSchemas::new(SchemaOptions::default()).unwrap();

        assert_eq!(
            schemas
                .get(FormKind::Contact)
                .required_field_names()
                .collect::<Vec<_>>(),
            vec!["firstName", "email", "message"]
        );
        assert_eq!(
            schemas
                .get(FormKind::Internship)
                .required_field_names()
                .collect::<Vec<_>>(),
            vec!["name", "email", "phone", "college", "interest"]
        );
        assert_eq!(
            schemas
                .get(FormKind::ProjectInquiry)
                .required_field_names()
                .collect::<Vec<_>>(),
            vec!["name", "email", "requirements"]
        );
    }

    #[test]
    fn test_設定でlast_nameとdurationを必須にできる() {
        let schemas = FormSchemas::new(SchemaOptions {
            contact_last_name_required:   true,
            internship_duration_required: true,
            ..SchemaOptions::default()
        })
        .unwrap();

        assert!(
            schemas
                .get(FormKind::Contact)
                .field("lastName")
                .unwrap()
                .required
        );
        assert!(
            schemas
                .get(FormKind::Internship)
                .field("duration")
                .unwrap()
                .required
        );
    }

    #[test]
    fn test_既定ではcontactのemailのみ形式チェックを持つ() {
        let schemas = FormSchemas::new(SchemaOptions::default()).unwrap();

        assert_eq!(
            schemas.get(FormKind::Contact).field("email").unwrap().constraint,
            Some(FieldConstraint::Email)
        );
        assert_eq!(
            schemas.get(FormKind::Internship).field("email").unwrap().constraint,
            None
        );
        assert_eq!(
            schemas
                .get(FormKind::ProjectInquiry)
                .field("email")
                .unwrap()
                .constraint,
            None
        );
    }

    #[test]
    fn test_設定ですべての種別のemailに形式チェックをかけられる() {
        let schemas = FormSchemas::new(SchemaOptions {
            email_format_on_all_forms: true,
            ..SchemaOptions::default()
        })
        .unwrap();

        for kind in [FormKind::Internship, FormKind::ProjectInquiry] {
            let email = schemas.get(kind).field("email").unwrap();
            assert!(email.required);
            assert_eq!(email.constraint, Some(FieldConstraint::Email));
        }
    }

    #[rstest]
    #[case(FormKind::Contact, "firstName")]
    #[case(FormKind::Internship, "college")]
    #[case(FormKind::ProjectInquiry, "requirements")]
    fn test_getは種別に対応するスキーマを返す(#[case] kind: FormKind, #[case] field: &str) {
        let schemas = FormSchemas::new(SchemaOptions::default()).unwrap();

        assert!(schemas.get(kind).field(field).is_some());
    }
}
