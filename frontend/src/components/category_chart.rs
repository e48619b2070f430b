use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::Category;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    /// (category, total) pairs in display order.
    pub totals: Vec<(Category, f64)>,
}

/// Bar chart of per-category totals, drawn with plotters on a canvas.
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().totals != old_props.totals {
            self.draw_chart(&ctx.props().totals);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // Draw once the canvas exists in the DOM.
        if !ctx.props().totals.is_empty() {
            self.draw_chart(&ctx.props().totals);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="category-chart">
                {if ctx.props().totals.is_empty() {
                    html! { <div class="chart-empty">{"No data to chart"}</div> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            width={CHART_WIDTH.to_string()}
                            height={CHART_HEIGHT.to_string()}
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl CategoryChart {
    fn draw_chart(&self, totals: &[(Category, f64)]) {
        if totals.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(CHART_WIDTH);
        canvas.set_height(CHART_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        // Amounts are strictly positive, so the maximum is too; headroom
        // keeps the tallest bar off the chart ceiling.
        let max_total = totals.iter().map(|(_, t)| *t).fold(0.0_f64, f64::max);
        let y_max = max_total * 1.1;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(0usize..totals.len(), 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let labels: Vec<String> = totals.iter().map(|(c, _)| c.to_string()).collect();
        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Amount")
            .y_label_formatter(&|v| format!("{:.0}", v))
            .x_label_formatter(&|idx| labels.get(*idx).cloned().unwrap_or_default())
            .x_labels(totals.len())
            .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .draw()
            .is_err()
        {
            return;
        }

        let bar_color = RGBColor(102, 126, 234);
        if chart
            .draw_series(totals.iter().enumerate().map(|(idx, (_, total))| {
                Rectangle::new([(idx, 0.0), (idx + 1, *total)], bar_color.filled())
            }))
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}
