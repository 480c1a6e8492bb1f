/// State management module
/// 
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The append-only record collection (library.rs)
/// - The preview modal's open/closed state (preview.rs)

pub mod library;
pub mod data;
pub mod preview;
