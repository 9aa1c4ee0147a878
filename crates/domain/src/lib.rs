//! # FormRelay ドメイン層
//!
//! フォーム送信の検証と、通知メールの組み立てを担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **宣言的スキーマ**: フォームごとの必須項目・制約は [`form::FormSchema`] というデータで表現し、
//!   検証ロジックは 1 つの汎用関数 [`form::validate`] に集約する
//! - **純粋関数**: 検証と通知の組み立てはどちらも I/O を持たない
//! - **不正な状態を作らない**: [`form::ValidatedSubmission`] は検証を通った値からしか作れず、
//!   [`notification::NotificationPayload`] は `ValidatedSubmission` からしか作れない
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（SMTP など）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`form`] - フォーム種別、スキーマ、送信ペイロード、バリデータ
//! - [`notification`] - 通知ペイロードと組み立て
//!
//! ## 使用例
//!
//! ```rust
//! use formrelay_domain::{
//!     form::{FormKind, FormSchemas, SchemaOptions, SubmissionPayload, validate},
//!     notification::compose,
//! };
//!
//! let schemas = FormSchemas::new(SchemaOptions::default()).unwrap();
//! let payload = SubmissionPayload::from_pairs([
//!     ("name", "Aiko"),
//!     ("email", "aiko@example.com"),
//!     ("requirements", "A landing page"),
//! ]);
//!
//! let submission = validate(&payload, schemas.get(FormKind::ProjectInquiry)).unwrap();
//! let notification = compose(
//!     &submission,
//!     FormKind::ProjectInquiry,
//!     "noreply@example.com",
//!     "team@example.com",
//! );
//! assert_eq!(notification.subject, "New Project Inquiry");
//! ```

pub mod error;
pub mod form;
pub mod notification;

pub use error::DomainError;
