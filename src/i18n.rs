//! Localized fixed strings for the card renderer.
//!
//! Translations are pre-baked; lookup falls back to English for any
//! unknown code. Nothing here is written at runtime.

/// The "links in table" heading and the usage hint in one language.
///
/// `links_shown` is used when the link list is currently displayed,
/// `links_hidden` when cells contain links but the list is off.
#[derive(Debug)]
pub struct HintStrings {
    pub links_heading: &'static str,
    pub links_shown: &'static str,
    pub links_hidden: &'static str,
}

/// Language used when no better match exists.
pub const DEFAULT_LANG: &str = "en";

/// Strings for a 2-letter language code; longer tags such as `de-AT`
/// match on their primary subtag. Unknown codes fall back to English.
pub fn lookup(code: &str) -> &'static HintStrings {
    let key = code.to_ascii_lowercase();
    match key.as_bytes().get(..2) {
        Some(b"de") => &DE,
        Some(b"es") => &ES,
        Some(b"fr") => &FR,
        Some(b"it") => &IT,
        Some(b"ja") => &JA,
        Some(b"nl") => &NL,
        Some(b"pl") => &PL,
        Some(b"pt") => &PT,
        Some(b"ru") => &RU,
        Some(b"zh") => &ZH,
        _ => &EN,
    }
}

static EN: HintStrings = HintStrings {
    links_heading: "Links in this table",
    links_shown: "Tip: `/table links off` hides the link list above tables.",
    links_hidden: "This table contains links. Use `/table links on` to list them.",
};

static DE: HintStrings = HintStrings {
    links_heading: "Links in dieser Tabelle",
    links_shown: "Tipp: `/table links off` blendet die Linkliste über Tabellen aus.",
    links_hidden: "Diese Tabelle enthält Links. Mit `/table links on` werden sie aufgelistet.",
};

static ES: HintStrings = HintStrings {
    links_heading: "Enlaces de esta tabla",
    links_shown: "Consejo: `/table links off` oculta la lista de enlaces sobre las tablas.",
    links_hidden: "Esta tabla contiene enlaces. Usa `/table links on` para verlos.",
};

static FR: HintStrings = HintStrings {
    links_heading: "Liens de ce tableau",
    links_shown: "Astuce : `/table links off` masque la liste des liens au-dessus des tableaux.",
    links_hidden: "Ce tableau contient des liens. Utilisez `/table links on` pour les afficher.",
};

static IT: HintStrings = HintStrings {
    links_heading: "Link in questa tabella",
    links_shown: "Suggerimento: `/table links off` nasconde l'elenco dei link sopra le tabelle.",
    links_hidden: "Questa tabella contiene dei link. Usa `/table links on` per elencarli.",
};

static JA: HintStrings = HintStrings {
    links_heading: "この表のリンク",
    links_shown: "ヒント: `/table links off` で表の上のリンク一覧を非表示にできます。",
    links_hidden: "この表にはリンクが含まれています。`/table links on` で一覧表示できます。",
};

static NL: HintStrings = HintStrings {
    links_heading: "Links in deze tabel",
    links_shown: "Tip: `/table links off` verbergt de linklijst boven tabellen.",
    links_hidden: "Deze tabel bevat links. Gebruik `/table links on` om ze te tonen.",
};

static PL: HintStrings = HintStrings {
    links_heading: "Linki w tej tabeli",
    links_shown: "Wskazówka: `/table links off` ukrywa listę linków nad tabelami.",
    links_hidden: "Ta tabela zawiera linki. Użyj `/table links on`, aby je wyświetlić.",
};

static PT: HintStrings = HintStrings {
    links_heading: "Links desta tabela",
    links_shown: "Dica: `/table links off` oculta a lista de links acima das tabelas.",
    links_hidden: "Esta tabela contém links. Use `/table links on` para listá-los.",
};

static RU: HintStrings = HintStrings {
    links_heading: "Ссылки в этой таблице",
    links_shown: "Совет: `/table links off` скрывает список ссылок над таблицами.",
    links_hidden: "В этой таблице есть ссылки. Используйте `/table links on`, чтобы показать их.",
};

static ZH: HintStrings = HintStrings {
    links_heading: "表格中的链接",
    links_shown: "提示：使用 `/table links off` 可隐藏表格上方的链接列表。",
    links_hidden: "此表格包含链接。使用 `/table links on` 可将其列出。",
};
