//! User facing text. Everything the CLI prints is in Japanese.

pub const INVALID_OPTION: &str = "無効なオプションです";

pub const GENERIC_ERROR: &str = "エラーが発生しました";

/// Prefix for fatal errors printed to stderr.
pub const ERROR_PREFIX: &str = "エラー：";

pub const NEW_ARTICLE_HELP_TEXT: &str = "\
Command:
  zenn new:article  新しい記事を追加

Usage:
  zenn new:article [options]

Options:
  --slug               記事のスラッグ
  --title              記事のタイトル
  --type               記事のタイプ。tech (技術記事) / idea (アイデア記事) のどちらかを指定
  --emoji              アイキャッチとして使われる絵文字（1文字だけ）
  --published          公開設定。true か false を指定（デフォルトは false）
  --machine-readable   作成したファイル名だけを出力
  --edit               作成した記事を環境変数 EDITOR で指定したエディタで開く

  --help, -h           ヘルプを表示

Example:
  zenn new:article --slug enjoy-zenn-with-client --title タイトル --type idea --emoji ✨
";
