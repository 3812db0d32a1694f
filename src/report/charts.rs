//! The bar chart of spending per location.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{currency::REFERENCE_CURRENCY, html::HeadElement, report::aggregation::LocationTotals};

/// A report chart with its HTML container ID and ECharts configuration.
pub(super) struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for `chart`.
pub(super) fn chart_view(chart: &ReportChart) -> Markup {
    html!(
        section id="charts" class="w-full max-w-screen-xl mx-auto mb-4"
        {
            div
                id=(chart.id)
                class="min-h-[380px] rounded dark:bg-gray-100"
            {}
        }
    )
}

/// Generates JavaScript that initializes the ECharts instance for `chart`
/// once the page has loaded, with dark mode support and responsive resizing.
pub(super) fn chart_script(chart: &ReportChart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }});"#,
        chart.id, chart.options
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

/// A bar per location with the location's total, in first-encounter order.
pub(super) fn location_totals_chart(totals: &LocationTotals) -> ReportChart {
    let (labels, values): (Vec<String>, Vec<f64>) = totals
        .iter()
        .map(|(location, total)| (location.to_owned(), total))
        .unzip();

    let chart = Chart::new()
        .title(
            Title::new()
                .text("Spending per location")
                .subtext(format!("In {REFERENCE_CURRENCY}")),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Total").data(values));

    ReportChart {
        id: "location-totals-chart",
        options: chart.to_string(),
    }
}

fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'MKD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        currency::Currency,
        html::HeadElement,
        report::{
            aggregation::aggregate_by_location,
            charts::{chart_script, location_totals_chart},
        },
        storage::InMemoryKeyValueStorage,
        transaction::{NewTransaction, TransactionStore},
    };

    #[test]
    fn chart_has_bar_per_location() {
        let mut store = TransactionStore::new(InMemoryKeyValueStorage::new());
        for (location, amount) in [("Skopje", 100.0), ("Ohrid", 20.0), ("Skopje", 5.0)] {
            store
                .create(NewTransaction::build(
                    "test",
                    amount,
                    Currency::Mkd,
                    date!(2025 - 10 - 05),
                    "Test",
                    location,
                ))
                .unwrap();
        }
        let totals = aggregate_by_location(&store.list_all());

        let chart = location_totals_chart(&totals);

        assert!(chart.options.contains("\"Skopje\""));
        assert!(chart.options.contains("\"Ohrid\""));
        assert!(chart.options.contains("105"));
        assert!(chart.options.contains("\"bar\""));
    }

    #[test]
    fn script_initializes_chart_by_id() {
        let chart = location_totals_chart(&aggregate_by_location(&[]));

        let HeadElement::ScriptSource(script) = chart_script(&chart) else {
            panic!("want inline script");
        };

        assert!(script.0.contains("getElementById(\"location-totals-chart\")"));
        assert!(script.0.contains(&chart.options));
    }
}
