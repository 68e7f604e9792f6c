//! 画面セッションの状態管理
//!
//! 選択中の画像・プレビュー・解析結果・エラー・ロード中フラグを1つの
//! `Session` にまとめ、操作はすべてメソッド経由で行う。
//!
//! - 解析中の再送信は `Error::Busy` で拒否する
//! - 送信ごとに `Ticket` を発行し、送信後に画像が選び直された場合は
//!   その応答を捨てる

use crate::chart::ResultView;
use crate::error::{Error, Result};
use crate::messages;
use crate::types::AnalysisResult;

/// 選択中の画像とプレビュー参照
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<F> {
    pub file: F,
    /// 表示用URL（WebならオブジェクトURL、CLIならfile:// URL）
    pub preview: String,
}

/// 送信1回分の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
    generation: u64,
}

/// 表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Loading,
    Settled,
}

#[derive(Debug)]
pub struct Session<F> {
    selection: Option<Selection<F>>,
    /// 画像を選び直すたびに進む
    generation: u64,
    next_ticket: u64,
    in_flight: Option<Ticket>,
    result: Option<AnalysisResult>,
    error: Option<String>,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            selection: None,
            generation: 0,
            next_ticket: 0,
            in_flight: None,
            result: None,
            error: None,
        }
    }
}

impl<F> Session<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像を選択する
    ///
    /// 結果とエラーはクリアする。解析中フラグには触れない。
    /// 置き換えられた前の選択を返すので、呼び出し側でプレビューを解放すること。
    pub fn select_file(&mut self, file: F, preview: impl Into<String>) -> Option<Selection<F>> {
        self.generation += 1;
        self.result = None;
        self.error = None;
        self.selection.replace(Selection {
            file,
            preview: preview.into(),
        })
    }

    /// セッション終了。選択中の画像を返す
    pub fn close(&mut self) -> Option<Selection<F>> {
        self.generation += 1;
        self.in_flight = None;
        self.result = None;
        self.error = None;
        self.selection.take()
    }

    /// 解析を開始する
    ///
    /// 成功時は発行したチケットと送信すべきファイルを返す。
    /// 画像未選択ならエラーメッセージを設定して `Error::NoFileSelected`。
    pub fn submit(&mut self) -> Result<(Ticket, &F)> {
        if self.in_flight.is_some() {
            return Err(Error::Busy);
        }

        self.error = None;

        let Some(selection) = self.selection.as_ref() else {
            self.error = Some(messages::NO_FILE_SELECTED.to_string());
            return Err(Error::NoFileSelected);
        };

        let ticket = Ticket {
            id: self.next_ticket,
            generation: self.generation,
        };
        self.next_ticket += 1;
        self.in_flight = Some(ticket);

        Ok((ticket, &selection.file))
    }

    /// リクエスト完了を反映する
    ///
    /// 反映した場合は true。発行中でないチケットや、送信後に画像が
    /// 選び直された場合は false（ロード中は解除する）。
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<AnalysisResult>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;

        if ticket.generation != self.generation {
            return false;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.user_message().to_string());
            }
        }
        true
    }

    pub fn state(&self) -> DisplayState {
        if self.in_flight.is_some() {
            DisplayState::Loading
        } else if self.result.is_some() || self.error.is_some() {
            DisplayState::Settled
        } else {
            DisplayState::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn selection(&self) -> Option<&Selection<F>> {
        self.selection.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.selection.is_some()
    }

    pub fn preview(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.preview.as_str())
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 表示用の結果（グラフ系列込み）
    pub fn view(&self) -> Option<ResultView> {
        self.result.as_ref().map(ResultView::from)
    }
}
