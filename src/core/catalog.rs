//! core/catalog.rs
//! The static content table: section -> (title, icon, body).
//!
//! Built once at startup. `Catalog::new` refuses a table that misses a
//! section, repeats one, or carries an empty body, so every later lookup
//! is total.

use thiserror::Error;

use super::types::{ContentEntry, EntryLayout, Glyph, LabeledText, Section, SectionId};

/// Page heading shown in the sidebar header, the main header and the window title.
pub const SUBJECT: &str = "Mr.Children";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown section id: {0:?}")]
    UnknownSection(String),

    #[error("no content entry for section {0}")]
    MissingEntry(SectionId),

    #[error("section {0} declared more than once")]
    DuplicateSection(SectionId),

    #[error("section {0} has an empty content entry")]
    EmptyEntry(SectionId),
}

/// One row of the table before validation.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub section: Section,
    pub entry: ContentEntry,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    // Indexed by `SectionId::index()`.
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<CatalogItem>> = vec![None; SectionId::ALL.len()];

        for item in items {
            let id = item.section.id;
            if item.entry.is_empty() {
                return Err(CatalogError::EmptyEntry(id));
            }
            let slot = &mut slots[id.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateSection(id));
            }
            *slot = Some(item);
        }

        let items = SectionId::ALL
            .into_iter()
            .zip(slots)
            .map(|(id, slot)| slot.ok_or(CatalogError::MissingEntry(id)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { items })
    }

    /// The compiled-in Mr.Children content.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_items())
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.items.iter().map(|item| &item.section)
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.items[id.index()].section
    }

    pub fn entry(&self, id: SectionId) -> &ContentEntry {
        &self.items[id.index()].entry
    }

    /// First declared section; the initial selection.
    pub fn first(&self) -> SectionId {
        SectionId::ALL[0]
    }
}

const HISTORY: &[LabeledText] = &[
    LabeledText { label: "1992", text: "ミニアルバム「EVERYTHING」でメジャーデビュー" },
    LabeledText { label: "1993", text: "シングル「CROSS ROAD」が大ヒット" },
    LabeledText { label: "1994", text: "アルバム「Atomic Heart」がトリプルミリオンを記録" },
    LabeledText { label: "1997-1999", text: "一時的な活動休止期間" },
    LabeledText { label: "2000", text: "コンスタントに作品を発表し、精力的に活動" },
    LabeledText { label: "2022", text: "デビュー30周年" },
];

const SONGS: &[LabeledText] = &[
    LabeledText {
        label: "代表曲",
        text: "「innocent world」「Tomorrow never knows」「名もなき詩」「Sign」「himawari」など",
    },
    LabeledText {
        label: "主要アルバム",
        text: "「EVERYTHING」(1992)、「Atomic Heart」(1994)、「深海」(1996)、「BOLERO」(1997)、「DISCOVERY」(1999)、「Q」(2000)など",
    },
    LabeledText { label: "最新作", text: "2023年にアルバム「miss you」をリリース" },
];

const STYLE: &[LabeledText] = &[
    LabeledText { label: "初期", text: "ストレートなロックサウンドが中心" },
    LabeledText {
        label: "中期",
        text: "様々な音楽要素を取り入れ、より深みのある音楽性を確立",
    },
    LabeledText {
        label: "後期",
        text: "エレクトロニカなど、さらに多様なジャンルを取り入れ、円熟味を増した深みのあるサウンドを確立",
    },
];

const LYRICS: &[LabeledText] = &[
    LabeledText {
        label: "普遍的テーマ",
        text: "青春時代の葛藤や恋愛の喜び、人生における様々な苦悩や希望",
    },
    LabeledText { label: "繊細な表現", text: "人間の複雑な感情を繊細に描き出す" },
    LabeledText { label: "深い洞察", text: "人生における様々なテーマに深い洞察を加える" },
    LabeledText { label: "時代を超えた共感", text: "多くの人々の心に響き続ける力" },
];

const INFLUENCE: &[LabeledText] = &[
    LabeledText {
        label: "音楽シーンへの影響",
        text: "多くのアーティストに影響を与え、新たな潮流を生み出す",
    },
    LabeledText { label: "後進の育成", text: "新たな才能の育成に貢献" },
    LabeledText {
        label: "ファンへの影響",
        text: "多くのファンの人生に寄り添い、励ましや慰めを与え続ける",
    },
    LabeledText {
        label: "音楽界のリーダー",
        text: "日本の音楽界を牽引する存在としての地位を確立",
    },
];

const OVERVIEW: &str = "Mr.Childrenは、1989年に結成された4人組ロックバンドです。桜井和寿（Vo/Gt）、田原健一（Gt）、中川敬輔（Ba）、鈴木英哉（Dr）のメンバーで構成されています。1992年のメジャーデビュー以来、幅広い世代に愛される国民的バンドとして、日本の音楽シーンに確固たる地位を築いてきました。";

const FUTURE: &str = "Mr.Childrenは、デビュー30周年を迎え、日本の音楽シーンを代表するバンドとしての存在感をさらに増しています。2023年にリリースされたアルバム「miss you」では、コロナ禍における人々の感情や社会の変化をテーマにした新たな一面を見せ、常に進化し続ける姿勢を示しています。今後も日本の音楽界を牽引していく存在として、さらなる活躍が期待されています。";

fn builtin_items() -> Vec<CatalogItem> {
    let item = |id, title, icon, entry| CatalogItem {
        section: Section { id, title, icon },
        entry,
    };
    let inline = |items| ContentEntry::Entries {
        layout: EntryLayout::Inline,
        items,
    };

    vec![
        item(
            SectionId::Overview,
            "バンド概要",
            Glyph::Music,
            ContentEntry::Paragraph(OVERVIEW),
        ),
        item(SectionId::History, "歴史", Glyph::History, inline(HISTORY)),
        item(
            SectionId::Songs,
            "代表曲とアルバム",
            Glyph::Album,
            ContentEntry::Entries {
                layout: EntryLayout::Stacked,
                items: SONGS,
            },
        ),
        item(
            SectionId::Style,
            "音楽スタイルの進化",
            Glyph::TrendingUp,
            inline(STYLE),
        ),
        item(
            SectionId::Lyrics,
            "桜井和寿の歌詞の魅力",
            Glyph::Mic,
            inline(LYRICS),
        ),
        item(
            SectionId::Influence,
            "Mr.Childrenの影響力",
            Glyph::Star,
            inline(INFLUENCE),
        ),
        item(
            SectionId::Future,
            "今後の展望",
            Glyph::TrendingUp,
            ContentEntry::Paragraph(FUTURE),
        ),
    ]
}
