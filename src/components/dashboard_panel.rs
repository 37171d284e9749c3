//! Dashboard Panel
//!
//! Report charts fetched through the query cache, so revisiting the
//! dashboard inside the staleness window costs no request.

use gymdesk_core::query::LIST_POLICY;
use gymdesk_core::Params;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::reports::ChartData;
use crate::context::use_app_context;
use crate::query::use_query_client;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let query = use_query_client();
    let ctx = use_app_context();

    let (charts, set_charts) = signal(Option::<ChartData>::None);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        ctx.reload_trigger().get();
        let query = query.clone();
        spawn_local(async move {
            match query
                .fetch::<ChartData>("/reports/charts", Params::new(), LIST_POLICY)
                .await
            {
                Ok(data) => {
                    set_error.set(None);
                    set_charts.set(Some(data));
                }
                Err(err) => set_error.set(Some(err.message)),
            }
        });
    });

    view! {
        <section class="panel dashboard-panel">
            <h2>"Resumen"</h2>

            {move || error.get().map(|message| view! {
                <p class="panel-error">{message}</p>
            })}

            {move || charts.get().map(|data| view! {
                <div class="chart-grid">
                    {data
                        .datasets
                        .iter()
                        .map(|dataset| {
                            let total: f64 = dataset.data.iter().sum();
                            view! {
                                <div class="chart-card">
                                    <h3>{dataset.label.clone()}</h3>
                                    <p class="chart-total">{format!("{total:.2}")}</p>
                                    <ul class="chart-points">
                                        {data
                                            .labels
                                            .iter()
                                            .zip(dataset.data.iter())
                                            .map(|(label, value)| view! {
                                                <li>
                                                    <span>{label.clone()}</span>
                                                    <span>{format!("{value:.2}")}</span>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </section>
    }
}
