//! Prompt constants and the prompt builder for reference formatting.
//!
//! The instruction blocks are written in Japanese, matching the product's
//! primary audience. Field extraction, source-type classification, and the
//! formatting itself all happen inside the model; the prompt is the whole
//! contract.

use crate::formatting::ReferenceFormat;

/// APA 7th edition rules.
pub const APA_INSTRUCTIONS: &str = "【希望フォーマット】
APA (American Psychological Association) 第7版
- 書籍: 著者名. (出版年). 書籍名 (版数). 出版社.
- 論文: 著者名. (出版年). 論文タイトル. 雑誌名, 巻(号), ページ範囲.";

/// MLA 9th edition rules.
pub const MLA_INSTRUCTIONS: &str = "【希望フォーマット】
MLA (Modern Language Association) 第9版
- 書籍: 著者名. 書籍名. 版数, 出版社, 出版年.
- 論文: 著者名. \"論文タイトル.\" 雑誌名, vol. 巻, no. 号, 出版年, pp. ページ範囲.";

/// Chicago (Notes and Bibliography) rules.
pub const CHICAGO_INSTRUCTIONS: &str = "【希望フォーマット】
Chicago Manual of Style (Notes and Bibliography)
- 書籍: 著者名. 書籍名. 出版地: 出版社, 出版年.
- 論文: 著者名. \"論文タイトル.\" 雑誌名 巻, no. 号 (出版年): ページ範囲.";

/// IEEE numbered-citation rules.
pub const IEEE_INSTRUCTIONS: &str = "【希望フォーマット】
IEEE (Institute of Electrical and Electronics Engineers)
- 書籍: [番号] 著者名, 書籍名, 版数. 出版地: 出版社, 出版年.
- 論文: [番号] 著者名, \"論文タイトル,\" 雑誌名, vol. 巻, no. 号, pp. ページ範囲, 出版年.";

/// Japanese standard academic format. The only style with a web-source rule.
pub const JAPANESE_INSTRUCTIONS: &str = "【希望フォーマット】
日本の標準学術形式
- 書籍: 著者名『書籍名』出版社, 出版年, ページ範囲.
- 論文: 著者名「論文タイトル」『雑誌名』巻号, 出版年, ページ範囲.
- Web: 著者名「タイトル」サイト名, URL (閲覧日: YYYY年MM月DD日).";

/// Auto-detect: the model picks the best-fitting style and names it inline
/// in the response text, ahead of the formatted citation.
pub const AUTO_INSTRUCTIONS: &str = "【希望フォーマット】
自動判定: 最も適切な学術フォーマット（APA、MLA、Chicago、IEEE、日本の標準学術形式など）を自動で判定し、そのフォーマット名を明記してください。

出力形式:
フォーマット: [判定したフォーマット名]

[整形された参考文献]";

/// Returns the instruction block for a citation style.
/// Pure, total over the closed enum — no error path.
pub fn format_instructions(format: ReferenceFormat) -> &'static str {
    match format {
        ReferenceFormat::Apa => APA_INSTRUCTIONS,
        ReferenceFormat::Mla => MLA_INSTRUCTIONS,
        ReferenceFormat::Chicago => CHICAGO_INSTRUCTIONS,
        ReferenceFormat::Ieee => IEEE_INSTRUCTIONS,
        ReferenceFormat::Japanese => JAPANESE_INSTRUCTIONS,
        ReferenceFormat::Auto => AUTO_INSTRUCTIONS,
    }
}

/// Builds the full formatting prompt: role statement, the user's raw input
/// embedded verbatim, the style instruction block, and the extraction and
/// output directives.
///
/// The input is passed through unmodified — no truncation, no escaping.
/// Garbage in is the model's problem, not ours.
pub fn build_formatting_prompt(reference_text: &str, format: ReferenceFormat) -> String {
    format!(
        "あなたは学術論文の参考文献を整形する専門家です。

以下の参考文献情報を解析し、指定されたフォーマットで正しく整形してください。

【入力された参考文献情報】
{reference_text}

{format_instructions}

【指示】
1. 入力された情報から、著者名、タイトル、出版年、出版社、ページ数などを抽出してください
2. 文献の種類（書籍、論文、ウェブサイトなど）を判定してください
3. 指定されたフォーマットに従って正確に整形してください
4. 整形された参考文献のみを出力してください（余計な説明は不要）

※情報が不足している場合は、その旨を指摘してください。",
        format_instructions = format_instructions(format),
    )
}
