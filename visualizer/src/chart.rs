use crate::axes::{nice_ticks, PlotBounds};
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke, Text},
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme,
};
use wavecore::SampleSet;

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 24.0;
const MARGIN_BOTTOM: f32 = 44.0;
const TICK_TARGET: usize = 8;

const BACKGROUND: Color = Color::from_rgb(0.05, 0.05, 0.05);
const GRID: Color = Color::from_rgb(0.22, 0.22, 0.26);
const AXIS: Color = Color::from_rgb(0.6, 0.6, 0.65);
const LABEL: Color = Color::from_rgb(0.85, 0.85, 0.88);
const TRACE: Color = Color::from_rgb(0.18, 0.72, 0.89);

/// Amplitude-versus-time line chart drawn on a canvas.
#[derive(Debug, Clone)]
pub struct Chart {
    points: Vec<(f64, f64)>,
    bounds: PlotBounds,
    pub show_grid: bool,
}

impl Chart {
    pub fn new(samples: &SampleSet) -> Self {
        Self {
            points: samples.iter().collect(),
            bounds: PlotBounds::from_samples(samples),
            show_grid: true,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.points.len()
    }

    fn draw_grid(&self, frame: &mut Frame, origin: Point, area: Size) {
        let b = self.bounds;
        for t in nice_ticks(b.t_min, b.t_max, TICK_TARGET) {
            let (x, _) = b.project(t, b.a_min, area.width, area.height);
            let x = origin.x + x;
            if self.show_grid {
                let line = Path::line(
                    Point::new(x, origin.y),
                    Point::new(x, origin.y + area.height),
                );
                frame.stroke(&line, Stroke::default().with_color(GRID).with_width(1.0));
            }
            frame.fill_text(Text {
                content: format_tick(t),
                position: Point::new(x - 10.0, origin.y + area.height + 6.0),
                color: LABEL,
                size: Pixels(12.0),
                ..Text::default()
            });
        }
        for a in nice_ticks(b.a_min, b.a_max, TICK_TARGET) {
            let (_, y) = b.project(b.t_min, a, area.width, area.height);
            let y = origin.y + y;
            if self.show_grid {
                let line = Path::line(
                    Point::new(origin.x, y),
                    Point::new(origin.x + area.width, y),
                );
                frame.stroke(&line, Stroke::default().with_color(GRID).with_width(1.0));
            }
            frame.fill_text(Text {
                content: format_tick(a),
                position: Point::new(8.0, y - 7.0),
                color: LABEL,
                size: Pixels(12.0),
                ..Text::default()
            });
        }
    }

    fn draw_trace(&self, frame: &mut Frame, origin: Point, area: Size) {
        if self.points.len() < 2 {
            return;
        }
        let path = Path::new(|builder| {
            let mut pen_down = false;
            for &(t, a) in &self.points {
                if !t.is_finite() || !a.is_finite() {
                    pen_down = false;
                    continue;
                }
                let (x, y) = self.bounds.project(t, a, area.width, area.height);
                let point = Point::new(origin.x + x, origin.y + y);
                if pen_down {
                    builder.line_to(point);
                } else {
                    builder.move_to(point);
                    pen_down = true;
                }
            }
        });
        frame.stroke(&path, Stroke::default().with_width(2.0).with_color(TRACE));
    }
}

fn format_tick(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".into()
    } else {
        text.into()
    }
}

impl<Message> canvas::Program<Message> for Chart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        let origin = Point::new(MARGIN_LEFT, MARGIN_TOP);
        let area = Size::new(
            (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        );

        self.draw_grid(&mut frame, origin, area);
        frame.stroke(
            &Path::rectangle(origin, area),
            Stroke::default().with_color(AXIS).with_width(1.0),
        );
        self.draw_trace(&mut frame, origin, area);

        frame.fill_text(Text {
            content: "Time (s)".into(),
            position: Point::new(
                origin.x + area.width / 2.0 - 24.0,
                bounds.height - 20.0,
            ),
            color: LABEL,
            size: Pixels(14.0),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: "Amplitude".into(),
            position: Point::new(8.0, 4.0),
            color: LABEL,
            size: Pixels(14.0),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}
