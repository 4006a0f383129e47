use shared::table::{is_valid_page, page_href, PageStrip, ResultsSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    /// Render page links (`?page=N`) instead of plain buttons
    #[prop_or_default]
    pub as_links: bool,
    /// Without a callback, links fall back to ordinary browser navigation
    #[prop_or_default]
    pub on_page_change: Option<Callback<usize>>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let Some(strip) = PageStrip::build(props.current_page, props.total_pages) else {
        return html! {};
    };
    let summary = ResultsSummary::new(props.current_page, props.page_size, props.total_items);

    let (path, query) = if props.as_links {
        current_location()
    } else {
        (String::new(), String::new())
    };

    let page_control = |page: usize, label: Html, enabled: bool, active: bool| -> Html {
        let total_pages = props.total_pages;
        let on_page_change = props.on_page_change.clone();
        let as_links = props.as_links;
        let onclick = Callback::from(move |e: MouseEvent| {
            if !enabled || !is_valid_page(page, total_pages) {
                e.prevent_default();
                return;
            }
            if let Some(callback) = &on_page_change {
                if as_links {
                    e.prevent_default();
                }
                callback.emit(page);
            }
        });
        let class = classes!(
            "page-button",
            active.then_some("active"),
            (!enabled).then_some("disabled")
        );

        if props.as_links {
            html! {
                <a
                    class={class}
                    href={page_href(&path, &query, page)}
                    aria-disabled={(!enabled).to_string()}
                    aria-current={active.then_some("page")}
                    {onclick}
                >
                    {label}
                </a>
            }
        } else {
            html! {
                <button type="button" class={class} disabled={!enabled} {onclick}>
                    {label}
                </button>
            }
        }
    };

    let ellipsis = || html! { <span class="page-ellipsis">{"..."}</span> };

    html! {
        <div class="pagination">
            <div class="pagination-summary">{summary.to_string()}</div>
            <div class="pagination-controls">
                {page_control(strip.current.saturating_sub(1), html! {"Previous"}, strip.has_previous(), false)}

                if strip.show_first {
                    {page_control(1, html! {"1"}, true, false)}
                    if strip.leading_ellipsis {
                        {ellipsis()}
                    }
                }

                {for strip.pages.iter().map(|&page| {
                    page_control(page, html! { {page} }, true, page == strip.current)
                })}

                if strip.show_last {
                    if strip.trailing_ellipsis {
                        {ellipsis()}
                    }
                    {page_control(strip.total, html! { {strip.total} }, true, false)}
                }

                {page_control(strip.current + 1, html! {"Next"}, strip.has_next(), false)}
            </div>
        </div>
    }
}

fn current_location() -> (String, String) {
    let location = gloo::utils::window().location();
    (
        location.pathname().unwrap_or_else(|_| "/".to_string()),
        location.search().unwrap_or_default(),
    )
}
