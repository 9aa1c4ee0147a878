//! # ドメイン層エラー定義
//!
//! スキーマ定義そのものの誤りを表現するエラー型。
//!
//! 利用者の入力誤りは [`crate::form::ValidationError`] で表し、こちらには含めない。
//! `DomainError` はプログラム（スキーマ定義）の誤りであり、起動時に検出される。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// スキーマ内でフィールド名が重複している
    ///
    /// フィールド名はスキーマ内で一意でなければならない。
    #[error("フィールド名が重複しています: {0}")]
    DuplicateField(String),

    /// スキーマにフィールドが 1 つもない
    #[error("スキーマにフィールドがありません")]
    EmptySchema,
}
