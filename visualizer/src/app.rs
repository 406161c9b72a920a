use crate::chart::Chart;
use iced::{
    widget::{button, canvas::Canvas, column, row, text, Container},
    Alignment, Element, Length, Task, Theme,
};
use log::info;
use wavecore::SampleSet;

#[derive(Debug, Clone)]
enum Message {
    ToggleGrid,
}

#[derive(Debug)]
struct Plot {
    title: String,
    chart: Chart,
}

impl Plot {
    fn boot(title: String, chart: Chart) -> (Self, Task<Message>) {
        (Plot { title, chart }, Task::none())
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleGrid => {
                state.chart.show_grid = !state.chart.show_grid;
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let grid_label = if state.chart.show_grid {
            "Hide grid"
        } else {
            "Show grid"
        };

        let header = row![
            text(&state.title).size(24),
            text(format!("{} samples", state.chart.sample_count())).size(14),
            button(grid_label).on_press(Message::ToggleGrid).padding(6),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let chart = Canvas::new(state.chart.clone())
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(column![header, chart].spacing(12).padding(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn application_title(state: &Plot) -> String {
    state.title.clone()
}

fn application_theme(_: &Plot) -> Theme {
    Theme::Dark
}

/// Opens a window plotting `samples` and blocks until it is closed.
pub fn show(title: impl Into<String>, samples: &SampleSet) -> iced::Result {
    let title = title.into();
    let chart = Chart::new(samples);
    info!("opening plot window '{}' with {} samples", title, chart.sample_count());

    iced::application(
        move || Plot::boot(title.clone(), chart.clone()),
        Plot::update,
        Plot::view,
    )
    .title(application_title)
    .theme(application_theme)
    .run()
}
