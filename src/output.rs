//! インポート進捗の出力先
//!
//! インポーターは行単位のメッセージを `ImportLog` に渡すだけで、
//! 表示方法（色付きコンソール、プログレスバー、テスト用バッファ）は実装側が決める。

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

pub const BEGIN_MESSAGE: &str = "Begin Importing Brush Set :";

/// 1ファイル分のメッセージ
pub fn imported_message(file: &str) -> String {
    format!("  Imported {}", file)
}

/// 完了時のサマリメッセージ
pub fn summary_message(count: usize) -> String {
    format!("Import Ended : {} Textures were imported", count)
}

/// インポート進捗の出力先
pub trait ImportLog {
    /// 処理開始（total は拡張子フィルタを通過したファイル数）
    fn begin(&mut self, total: usize);

    /// 1ファイルのインポート完了
    ///
    /// `verbose` が false の場合もインポーターは呼び出す。
    /// 行を出すかどうかは `verbose` を見て実装側が決める。
    fn imported(&mut self, file: &str, verbose: bool);

    /// 全体の完了
    fn finished(&mut self, count: usize);
}

/// 標準出力向けの実装
///
/// verbose でない場合は行の代わりにプログレスバーを進める。
/// プログレスバーは stderr が端末でなければ描画されない。
#[derive(Default)]
pub struct ConsoleLog {
    progress: Option<ProgressBar>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImportLog for ConsoleLog {
    fn begin(&mut self, total: usize) {
        println!();
        println!("{}", BEGIN_MESSAGE.bold());

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        self.progress = Some(pb);
    }

    fn imported(&mut self, file: &str, verbose: bool) {
        if verbose {
            let line = imported_message(file);
            match &self.progress {
                Some(pb) => pb.suspend(|| println!("{}", line.green())),
                None => println!("{}", line.green()),
            }
        }
        if let Some(pb) = &self.progress {
            pb.set_message(file.to_string());
            pb.inc(1);
        }
    }

    fn finished(&mut self, count: usize) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
        println!("{}", summary_message(count).bold());
        println!();
    }
}

/// 何も出力しない実装（--json 用）
pub struct QuietLog;

impl ImportLog for QuietLog {
    fn begin(&mut self, _total: usize) {}

    fn imported(&mut self, _file: &str, _verbose: bool) {}

    fn finished(&mut self, _count: usize) {}
}

/// メッセージを保持するだけの実装（テスト用）
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryLog {
    pub lines: Vec<String>,
    pub total: Option<usize>,
}

#[cfg(test)]
impl ImportLog for MemoryLog {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
        self.lines.push(BEGIN_MESSAGE.to_string());
    }

    fn imported(&mut self, file: &str, verbose: bool) {
        if verbose {
            self.lines.push(imported_message(file));
        }
    }

    fn finished(&mut self, count: usize) {
        self.lines.push(summary_message(count));
    }
}

/// purge コマンドの結果表示用サマリ
pub struct PurgeSummary {
    pub prefix: String,
    pub message: String,
}

impl PurgeSummary {
    pub fn format(textures: usize, images: usize, dry_run: bool) -> Self {
        let verb = if dry_run { "would be removed" } else { "removed" };
        match (textures, images) {
            (0, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: "Nothing to purge".to_string(),
            },
            (t, i) => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "{} texture(s), {} image(s) {}",
                    t.green(),
                    i.green(),
                    verb
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_shapes() {
        assert_eq!(imported_message("a.png"), "  Imported a.png");
        assert_eq!(
            summary_message(2),
            "Import Ended : 2 Textures were imported"
        );
    }

    #[test]
    fn memory_log_omits_file_lines_when_not_verbose() {
        let mut log = MemoryLog::default();
        log.begin(1);
        log.imported("a.png", false);
        log.finished(1);

        assert_eq!(
            log.lines,
            vec![BEGIN_MESSAGE.to_string(), summary_message(1)]
        );
    }

    #[test]
    fn purge_summary_nothing() {
        let summary = PurgeSummary::format(0, 0, false);
        assert_eq!(summary.message, "Nothing to purge");
    }

    #[test]
    fn purge_summary_dry_run_wording() {
        let summary = PurgeSummary::format(1, 2, true);
        assert!(summary.message.contains("would be removed"));
    }
}
