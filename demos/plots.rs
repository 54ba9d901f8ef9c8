use gnuplot::{AxesCommon, Color, Figure};
use tracing_subscriber::EnvFilter;

use easetab::preview::{Point, Preview, PreviewConfig};
use easetab::Ease;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut preview = Preview::new(PreviewConfig::default()).expect("default config is valid");
    preview.toggle();

    let mut plots = Plots { plots: Vec::new() };
    for ease in Ease::iter() {
        plots.add(ease, &preview);
    }

    plots.show_gnuplot();
}

struct Plot {
    name: &'static str,
    ts: Vec<f32>,
    vs: Vec<f32>,
}

struct Plots {
    plots: Vec<Plot>,
}

impl Plots {
    fn add(&mut self, ease: Ease, preview: &Preview) {
        let (ts, vs) = preview
            .sample(ease)
            .into_iter()
            .map(|Point { x, y }| (x, y))
            .unzip();

        self.plots.push(Plot {
            name: ease.name(),
            ts,
            vs,
        });
    }

    fn show_gnuplot(&self) {
        let mut figure = Figure::new();

        // Show plots in a square rows/columns layout
        let square_size = (self.plots.len() as f32).sqrt().ceil() as u32;

        for (i, plot) in self.plots.iter().enumerate() {
            figure
                .axes2d()
                .lines(&plot.ts, &plot.vs, &[Color("green")])
                .set_title(plot.name, &[])
                .set_x_label("t", &[])
                .set_pos_grid(square_size, square_size, i as u32);
        }

        figure.show().unwrap();
    }
}
