//! # 外部 API クライアント
//!
//! ゲートウェイから GlobalQuran API への通信を担当する。

pub mod global_quran;

pub use global_quran::{
   GlobalQuranClient,
   GlobalQuranClientImpl,
   GlobalQuranError,
   QuranListBody,
   QuranPageBody,
};
