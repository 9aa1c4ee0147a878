//! # Form Service ライブラリ
//!
//! フォーム送信を受け付け、検証して通知メールとして中継する API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: DI とルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: フォーム送信ユースケース

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
