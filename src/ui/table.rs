/// Record table
///
/// One row per record, in library order: name, handle, and a "View"
/// control. No sorting, filtering or pagination.

use iced::widget::{button, column, horizontal_rule, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::FileRecord;
use crate::Message;

/// Column widths (name, url, preview)
const NAME_PORTION: u16 = 3;
const URL_PORTION: u16 = 6;
const PREVIEW_PORTION: u16 = 2;

pub fn view(records: &[FileRecord]) -> Element<'_, Message> {
    let header = row![
        text("File Name").width(Length::FillPortion(NAME_PORTION)),
        text("File URL").width(Length::FillPortion(URL_PORTION)),
        text("File Preview").width(Length::FillPortion(PREVIEW_PORTION)),
    ]
    .spacing(12);

    let body: Element<Message> = if records.is_empty() {
        text("No files yet. Use \"Select Files\" to add some.")
            .size(14)
            .into()
    } else {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| record_row(index, record));

        scrollable(Column::with_children(rows).spacing(8))
            .height(Length::Fill)
            .into()
    };

    column![header, horizontal_rule(1), body].spacing(8).into()
}

fn record_row(index: usize, record: &FileRecord) -> Element<'_, Message> {
    // The handle doubles as a link: clicking copies it
    let link = button(text(&record.url).size(13))
        .style(button::text)
        .padding(0)
        .on_press(Message::CopyUrl(record.url.clone()));

    row![
        text(&record.name).width(Length::FillPortion(NAME_PORTION)),
        link.width(Length::FillPortion(URL_PORTION)),
        button("View")
            .on_press(Message::OpenPreview(index))
            .padding([4, 12])
            .width(Length::FillPortion(PREVIEW_PORTION)),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
