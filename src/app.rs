use leptos::*;
use strum::IntoEnumIterator;

use crate::application::{Action, AppConfig};
use crate::domain::{market::ChartPeriod, navigation::View};
use crate::global_state::{
    active_period, error_message, history_rows, hot_cards, hot_empty, hot_loading, market_panel, pagination,
    quote_panel, search_cards, search_empty, visible_view,
};
use crate::presentation::{
    dispatch,
    format::Trend,
    view_model::{CardState, IndexPanel, QuotePanel},
};

fn trend_class(base: &str, trend: Option<Trend>) -> String {
    match trend {
        Some(trend) => format!("{} {}", base, trend.css_class()),
        None => base.to_string(),
    }
}

fn region_display(view: View) -> impl Fn() -> &'static str {
    move || if visible_view().get() == view { "block" } else { "none" }
}

/// Stock board root component
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    view! {
        <style>
            {r#"
            .stock-board { font-family: -apple-system, BlinkMacSystemFont, sans-serif; background: #f5f7fa; min-height: 100vh; padding: 20px; color: #333; }
            .header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
            .search-box input { padding: 8px 12px; border: 1px solid #ccd; border-radius: 6px; width: 220px; }
            .search-box button, .pagination button, .back-btn, .period-btn { padding: 8px 14px; border: none; border-radius: 6px; background: #667eea; color: white; cursor: pointer; }
            button:disabled { background: #ccd; cursor: default; }
            .market-overview { display: flex; gap: 16px; margin-bottom: 20px; }
            .index-card, .stat-card { background: white; border-radius: 10px; padding: 12px 16px; box-shadow: 0 2px 6px rgba(0,0,0,0.06); }
            .stock-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px; }
            .stock-card { background: white; border-radius: 10px; padding: 12px; cursor: pointer; }
            .up { color: #e53e3e; }
            .down { color: #38a169; }
            .period-btn.active { background: #4c51bf; }
            .history-table { width: 100%; border-collapse: collapse; background: white; }
            .history-table td, .history-table th { padding: 6px 8px; border-bottom: 1px solid #eef; text-align: right; }
            .modal { position: fixed; inset: 0; background: rgba(0,0,0,0.4); align-items: center; justify-content: center; }
            .modal-content { background: white; border-radius: 10px; padding: 20px 24px; min-width: 280px; }
            .close { float: right; cursor: pointer; font-size: 20px; }
            "#}
        </style>
        <div class="stock-board">
            <Header/>
            <MarketOverviewPanel/>
            <HotListSection/>
            <SearchResultsSection/>
            <StockDetailSection config=config/>
            <ErrorModal/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let (keyword, set_keyword) = create_signal(String::new());
    let submit = move || dispatch(Action::Search(keyword.get_untracked()));

    view! {
        <div class="header">
            <h1>"Stock Board"</h1>
            <div class="search-box">
                <input
                    type="text"
                    placeholder="Code or name"
                    prop:value=keyword
                    on:input=move |ev| set_keyword.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button on:click=move |_| submit()>"Search"</button>
            </div>
        </div>
    }
}

#[component]
fn MarketOverviewPanel() -> impl IntoView {
    let panel = market_panel();
    view! {
        <div class="market-overview">
            {move || panel.get().sh_index.map(|index| view! { <IndexCard index=index/> })}
            {move || panel.get().sz_index.map(|index| view! { <IndexCard index=index/> })}
            <div class="stat-card">
                <div>"Stocks: " {move || panel.get().total_stocks}</div>
                <div class="up">"Up: " {move || panel.get().up_count}</div>
                <div class="down">"Down: " {move || panel.get().down_count}</div>
                <div>"Flat: " {move || panel.get().flat_count}</div>
            </div>
        </div>
    }
}

#[component]
fn IndexCard(index: IndexPanel) -> impl IntoView {
    view! {
        <div class="index-card">
            <div class="index-name">{index.name}</div>
            <div class=trend_class("index-value", Some(index.trend))>{index.value}</div>
            <div class=trend_class("index-change", Some(index.trend))>{index.change}</div>
        </div>
    }
}

#[component]
fn StockCard(card: CardState) -> impl IntoView {
    let code = card.code.clone();
    view! {
        <div class="stock-card" on:click=move |_| dispatch(Action::OpenStock(code.clone()))>
            <div class="stock-name">{card.name}</div>
            <div class="stock-code">{card.code.to_string()} " " {card.market}</div>
            <div class=trend_class("stock-price", card.trend)>{card.price}</div>
            <div class=trend_class("stock-change", card.trend)>{card.change}</div>
        </div>
    }
}

#[component]
fn HotListSection() -> impl IntoView {
    let page = pagination();
    view! {
        <section class="hot-list" style:display=region_display(View::HotList)>
            <h2>"Hot Stocks"</h2>
            <div class="loading" style:display=move || if hot_loading().get() { "block" } else { "none" }>
                "Loading..."
            </div>
            <div class="stock-grid">
                {move || hot_cards().get().into_iter().map(|card| view! { <StockCard card=card/> }).collect_view()}
            </div>
            <Show when=move || hot_empty().get()>
                <p class="empty">"No stocks available"</p>
            </Show>
            <div class="pagination">
                <button
                    disabled=move || page.get().map_or(true, |p| p.previous_disabled)
                    on:click=move |_| dispatch(Action::PreviousPage)
                >
                    "Previous"
                </button>
                <span class="page-info">{move || page.get().map(|p| p.label).unwrap_or_default()}</span>
                <button
                    disabled=move || page.get().map_or(true, |p| p.next_disabled)
                    on:click=move |_| dispatch(Action::NextPage)
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}

#[component]
fn SearchResultsSection() -> impl IntoView {
    view! {
        <section class="search-results" style:display=region_display(View::SearchResults)>
            <button class="back-btn" on:click=move |_| dispatch(Action::BackToList)>"Back"</button>
            <h2>"Search Results"</h2>
            <div class="stock-grid">
                {move || search_cards().get().into_iter().map(|card| view! { <StockCard card=card/> }).collect_view()}
            </div>
            <Show when=move || search_empty().get()>
                <p class="empty">"No matching stocks found"</p>
            </Show>
        </section>
    }
}

#[component]
fn StockDetailSection(config: AppConfig) -> impl IntoView {
    view! {
        <section class="stock-detail" style:display=region_display(View::StockDetail)>
            <button class="back-btn" on:click=move |_| dispatch(Action::BackToList)>"Back"</button>
            {move || quote_panel().get().map(|panel| view! { <QuoteHeader panel=panel/> })}
            <div class="period-selector">
                {ChartPeriod::iter()
                    .map(|period| {
                        view! {
                            <button
                                class=move || if active_period().get() == period { "period-btn active" } else { "period-btn" }
                                on:click=move |_| dispatch(Action::ChangePeriod(period))
                            >
                                {period.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <canvas id=config.chart_canvas_id width=config.chart_width height=config.chart_height/>
            <HistoryTable/>
        </section>
    }
}

#[component]
fn QuoteHeader(panel: QuotePanel) -> impl IntoView {
    view! {
        <div class="detail-header">
            <h2>{panel.title}</h2>
            <div class=trend_class("detail-price", Some(panel.trend))>{panel.price}</div>
            <div class=trend_class("detail-change", Some(panel.trend))>{panel.change}</div>
            <div class="detail-grid">
                <span>"Open " {panel.open}</span>
                <span>"High " {panel.high}</span>
                <span>"Low " {panel.low}</span>
                <span>"Prev close " {panel.pre_close}</span>
                <span>"Volume " {panel.volume}</span>
                <span>"Amount " {panel.amount}</span>
            </div>
        </div>
    }
}

#[component]
fn HistoryTable() -> impl IntoView {
    view! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Open"</th>
                    <th>"High"</th>
                    <th>"Low"</th>
                    <th>"Close"</th>
                    <th>"Change"</th>
                    <th>"Volume"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    history_rows()
                        .get()
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.date}</td>
                                    <td>{row.open}</td>
                                    <td>{row.high}</td>
                                    <td>{row.low}</td>
                                    <td>{row.close}</td>
                                    <td class=trend_class("", Some(row.trend))>{row.change}</td>
                                    <td>{row.volume}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn ErrorModal() -> impl IntoView {
    let message = error_message();
    view! {
        <div
            class="modal"
            style:display=move || if message.get().is_some() { "flex" } else { "none" }
            on:click=move |_| dispatch(Action::BackdropClick { inside_modal: false })
        >
            <div
                class="modal-content"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    dispatch(Action::BackdropClick { inside_modal: true });
                }
            >
                <span
                    class="close"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        dispatch(Action::CloseError);
                    }
                >
                    "×"
                </span>
                <p class="error-message">{move || message.get().unwrap_or_default()}</p>
            </div>
        </div>
    }
}
