use tabled::{
    Table,
    builder::Builder,
    settings::{Style, object::Rows, style::LineText},
};

use super::TabStyle;

pub(crate) fn apply_style(table: &mut Table, style: TabStyle) {
    match style {
        TabStyle::Rounded => table.with(Style::rounded()),
        TabStyle::Modern => table.with(Style::modern()),
        TabStyle::ModernRounded => table.with(Style::modern_rounded()),
        TabStyle::Ascii => table.with(Style::ascii()),
        TabStyle::AsciiRounded => table.with(Style::ascii_rounded()),
        TabStyle::Psql => table.with(Style::psql()),
        TabStyle::Markdown => table.with(Style::markdown()),
        TabStyle::Extended => table.with(Style::extended()),
        TabStyle::Sharp => table.with(Style::sharp()),
        TabStyle::Dots => table.with(Style::dots()),
        TabStyle::ReStructuredText => table.with(Style::re_structured_text()),
        TabStyle::Blank => table.with(Style::blank()),
        TabStyle::Empty => table.with(Style::empty()),
    };
}

/// Styles without a top border have no line to draw a title on.
fn has_top_border(style: TabStyle) -> bool {
    !matches!(
        style,
        TabStyle::Psql | TabStyle::Markdown | TabStyle::Blank | TabStyle::Empty
    )
}

pub(crate) fn apply_title_line(table: &mut Table, title: &str) {
    table.with(LineText::new(format!(" {title} "), Rows::first()).offset(1));
}

/// Two column table with a header row and the section title drawn on its top border.
pub(crate) fn titled_table<I>(title: &str, header: [&str; 2], rows: I, style: TabStyle) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut builder = Builder::default();
    builder.push_record(header);
    for (key, value) in rows {
        builder.push_record([key, value]);
    }
    let mut table = builder.build();
    apply_style(&mut table, style);
    if has_top_border(style) {
        apply_title_line(&mut table, title);
        table.to_string()
    } else {
        format!("{title}\n{table}")
    }
}
