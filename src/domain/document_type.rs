use std::fmt;

const REFERRAL_LETTER_TEMPLATE: &str = "\
以下のOCRテキストは医療機関の紹介状です。以下の項目を抽出し、構造化して出力してください：

【基本情報】
- 紹介先医療機関名
- 紹介元医療機関名・医師名
- 患者氏名・年齢・性別
- 紹介日

【症状・所見】
- 主訴
- 現病歴
- 既往歴
- 家族歴
- 身体所見・検査結果

【紹介理由・依頼事項】
- 紹介目的
- 検査依頼項目
- 治療依頼事項

不明な項目は「記載なし」として出力してください。";

const MEDICATION_NOTEBOOK_TEMPLATE: &str = "\
以下のOCRテキストはお薬手帳の記録です。薬剤情報を以下の形式で構造化して出力してください：

【処方情報】
- 処方日：
- 医療機関名：
- 医師名：

【薬剤一覧】
各薬剤について以下の形式で出力：
1. 薬品名（商品名・一般名）
   - 用量：〇〇mg/錠
   - 用法：1日〇回、〇錠ずつ
   - 服用時間：朝食後、夕食後など
   - 処方日数：〇日分
   - 効能・効果：

【注意事項】
- 薬剤師からの指導内容
- 副作用情報
- その他の注意点

不明な項目は「記載なし」として出力してください。";

const GENERAL_TEXT_TEMPLATE: &str = "\
以下のOCRテキストを読みやすく整形してください：

1. 文章の構造を分析し、適切な段落に分割
2. 箇条書きや番号付きリストがあれば適切にフォーマット
3. 日付、数値、固有名詞の誤認識を可能な限り修正
4. 文脈に合わない文字や記号を除去
5. 適切な句読点を補完

元のテキストの意味を変えることなく、読みやすい形式で出力してください。";

/// Kind of scanned document; selects the extraction checklist sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentType {
    ReferralLetter,
    MedicationNotebook,
    #[default]
    GeneralText,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [
        DocumentType::ReferralLetter,
        DocumentType::MedicationNotebook,
        DocumentType::GeneralText,
    ];

    /// Exact match on the client's label or its English alias. Unknown labels
    /// fall back to [`DocumentType::GeneralText`].
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label || t.alias() == label)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::ReferralLetter => "紹介状",
            DocumentType::MedicationNotebook => "お薬手帳",
            DocumentType::GeneralText => "一般テキスト",
        }
    }

    pub fn alias(&self) -> &'static str {
        match self {
            DocumentType::ReferralLetter => "referral letter",
            DocumentType::MedicationNotebook => "medication notebook",
            DocumentType::GeneralText => "general text",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            DocumentType::ReferralLetter => REFERRAL_LETTER_TEMPLATE,
            DocumentType::MedicationNotebook => MEDICATION_NOTEBOOK_TEMPLATE,
            DocumentType::GeneralText => GENERAL_TEXT_TEMPLATE,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}
