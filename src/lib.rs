/*
 * Responsibility
 * - モジュール公開 (binary と tests/ から同じ Router を使えるようにする)
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
