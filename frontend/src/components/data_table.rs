use super::pagination::Pagination;
use shared::table::{
    CellValue, ExternalPage, PaginationMode, Record, SortDirection, TableState, TableView,
    DEFAULT_PAGE_SIZE,
};
use std::rc::Rc;
use yew::prelude::*;

/// Custom cell renderer: the cell value plus the whole row
pub type CellRenderer<R> = fn(&CellValue, &R) -> Html;

pub struct Column<R> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: CellRenderer<R>) -> Self {
        self.render = Some(render);
        self
    }

    fn cell(&self, row: &R) -> Html
    where
        R: Record,
    {
        let value = row.field(&self.key);
        match self.render {
            Some(render) => render(&value, row),
            None => html! { {value.to_string()} },
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            render: self.render,
        }
    }
}

// Renderers are compared by presence only
impl<R> PartialEq for Column<R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.sortable == other.sortable
            && self.render.is_some() == other.render.is_some()
    }
}

/// Who pages the rows
#[derive(Clone, Default, PartialEq)]
pub enum TableMode {
    /// The table sorts and pages `rows` itself
    #[default]
    SelfManaged,
    /// `rows` is already the current page
    External {
        page: ExternalPage,
        on_page_change: Option<Callback<usize>>,
    },
}

impl TableMode {
    fn pagination(&self) -> PaginationMode {
        match self {
            TableMode::SelfManaged => PaginationMode::SelfManaged,
            TableMode::External { page, .. } => PaginationMode::External(*page),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: PartialEq + 'static> {
    pub rows: Rc<Vec<R>>,
    pub columns: Rc<Vec<Column<R>>>,
    #[prop_or_default]
    pub mode: TableMode,
    #[prop_or(DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[prop_or(true)]
    pub show_pagination: bool,
    #[prop_or_default]
    pub on_row_click: Option<Callback<R>>,
    #[prop_or_default]
    pub on_view: Option<Callback<R>>,
    #[prop_or_default]
    pub on_edit: Option<Callback<R>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<R>>,
    #[prop_or_default]
    pub show_actions: bool,
    #[prop_or(true)]
    pub show_view: bool,
    #[prop_or(true)]
    pub show_edit: bool,
    #[prop_or(true)]
    pub show_delete: bool,
    #[prop_or(AttrValue::Static("No data available"))]
    pub empty_message: AttrValue,
}

#[function_component(DataTable)]
pub fn data_table<R>(props: &DataTableProps<R>) -> Html
where
    R: Record + Clone + PartialEq + 'static,
{
    let state = use_state(TableState::new);
    let mode = props.mode.pagination();
    let view = TableView::build(&props.rows, &mode, &state, props.page_size, props.show_pagination);

    // The owner can shrink `rows` under the stored page
    {
        let state = state.clone();
        let self_managed = mode.is_self_managed();
        use_effect_with((self_managed, view.total_pages), move |&(self_managed, total_pages)| {
            let mut next = (*state).clone();
            if self_managed && next.clamp_page(total_pages) {
                state.set(next);
            }
        });
    }

    let on_sort = {
        let state = state.clone();
        Callback::from(move |(key, sortable): (String, bool)| {
            let mut next = (*state).clone();
            if next.click_header(&mode, &key, sortable) {
                state.set(next);
            }
        })
    };

    let (as_links, on_page_change) = match &props.mode {
        TableMode::SelfManaged => {
            let state = state.clone();
            let total_pages = view.total_pages;
            let callback = Callback::from(move |page: usize| {
                let mut next = (*state).clone();
                if next.go_to(page, total_pages) {
                    log::debug!("table page -> {}", page);
                    state.set(next);
                }
            });
            (false, Some(callback))
        }
        TableMode::External { on_page_change, .. } => (true, on_page_change.clone()),
    };

    let show_view = props.show_actions && props.show_view && props.on_view.is_some();
    let show_edit = props.show_actions && props.show_edit && props.on_edit.is_some();
    let show_delete = props.show_actions && props.show_delete && props.on_delete.is_some();
    let actions_column = props.show_actions && (show_view || show_edit || show_delete);
    let column_count = props.columns.len() + usize::from(actions_column);

    let action_button = |label: &'static str, class: &'static str, callback: &Option<Callback<R>>, row: &R| -> Html {
        let Some(callback) = callback.clone() else {
            return html! {};
        };
        let row = row.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(row.clone());
        });
        html! {
            <button type="button" class={classes!("table-action", class)} title={label} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <div class="data-table">
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            {for props.columns.iter().map(|column| {
                                let sortable = column.sortable && mode.allows_sorting();
                                let onclick = {
                                    let on_sort = on_sort.clone();
                                    let key = column.key.clone();
                                    let column_sortable = column.sortable;
                                    Callback::from(move |_: MouseEvent| on_sort.emit((key.clone(), column_sortable)))
                                };
                                let indicator = state.sort()
                                    .filter(|sort| sort.key == column.key)
                                    .map(|sort| match sort.direction {
                                        SortDirection::Ascending => "▲",
                                        SortDirection::Descending => "▼",
                                    })
                                    .unwrap_or("⇅");
                                html! {
                                    <th class={classes!(sortable.then_some("sortable"))} {onclick}>
                                        <span>{&column.label}</span>
                                        if sortable {
                                            <span class="sort-indicator">{indicator}</span>
                                        }
                                    </th>
                                }
                            })}
                            if actions_column {
                                <th class="actions-header">{"Actions"}</th>
                            }
                        </tr>
                    </thead>
                    <tbody>
                        if view.is_empty() {
                            <tr>
                                <td class="empty-row" colspan={column_count.to_string()}>
                                    {props.empty_message.clone()}
                                </td>
                            </tr>
                        } else {
                            {for view.rows.iter().map(|row| {
                                let onclick = props.on_row_click.clone().map(|callback| {
                                    let row = (*row).clone();
                                    Callback::from(move |_: MouseEvent| callback.emit(row.clone()))
                                });
                                let clickable = onclick.is_some();
                                html! {
                                    <tr class={classes!(clickable.then_some("clickable"))} {onclick}>
                                        {for props.columns.iter().map(|column| html! {
                                            <td>{column.cell(row)}</td>
                                        })}
                                        if actions_column {
                                            <td class="row-actions">
                                                if show_view {
                                                    {action_button("View", "view", &props.on_view, row)}
                                                }
                                                if show_edit {
                                                    {action_button("Edit", "edit", &props.on_edit, row)}
                                                }
                                                if show_delete {
                                                    {action_button("Delete", "delete", &props.on_delete, row)}
                                                }
                                            </td>
                                        }
                                    </tr>
                                }
                            })}
                        }
                    </tbody>
                </table>
            </div>
            if props.show_pagination {
                <Pagination
                    current_page={view.current_page}
                    total_pages={view.total_pages}
                    total_items={view.total_items}
                    page_size={props.page_size.max(1)}
                    {as_links}
                    {on_page_change}
                />
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::events::{EventListener, EventListenerOptions};
    use gloo::history::{BrowserHistory, History};
    use gloo::timers::future::TimeoutFuture;
    use shared::table::ExternalPage;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, MouseEvent as DomMouseEvent, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    impl Record for Row {
        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => self.id.into(),
                "name" => self.name.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn rows(count: u32) -> Rc<Vec<Row>> {
        Rc::new((1..=count).map(|id| Row { id, name: "row" }).collect())
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        rows: Rc<Vec<Row>>,
        #[prop_or_default]
        mode: TableMode,
        #[prop_or_default]
        on_row_click: Option<Callback<Row>>,
        #[prop_or_default]
        on_delete: Option<Callback<Row>>,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let columns = use_memo((), |_| vec![Column::<Row>::new("id", "ID").sortable(), Column::<Row>::new("name", "Name")]);
        html! {
            <DataTable<Row>
                rows={props.rows.clone()}
                {columns}
                mode={props.mode.clone()}
                show_actions={true}
                on_row_click={props.on_row_click.clone()}
                on_delete={props.on_delete.clone()}
            />
        }
    }

    async fn mount(props: HarnessProps) -> Element {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        yew::Renderer::<Harness>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(0).await;
        root
    }

    fn find(root: &Element, selector: &str) -> HtmlElement {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element matches {}", selector))
            .unchecked_into()
    }

    fn page_link(root: &Element, label: &str) -> HtmlElement {
        let links = root.query_selector_all("a.page-button").unwrap();
        (0..links.length())
            .filter_map(|index| links.item(index))
            .map(|node| node.unchecked_into::<HtmlElement>())
            .find(|link| link.text_content().as_deref() == Some(label))
            .unwrap_or_else(|| panic!("no page link {}", label))
    }

    /// Dispatch a cancelable click and report whether anything prevented its
    /// default. The window listener runs after the table's handlers and
    /// always cancels so the test page never navigates.
    fn click_default_prevented(target: &HtmlElement) -> bool {
        let prevented = Rc::new(Cell::new(false));
        let _guard = {
            let prevented = prevented.clone();
            EventListener::new_with_options(
                &gloo::utils::window(),
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    prevented.set(event.default_prevented());
                    event.prevent_default();
                },
            )
        };
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = DomMouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
        target.dispatch_event(&event).unwrap();
        prevented.get()
    }

    #[wasm_bindgen_test]
    async fn test_action_click_does_not_reach_row() {
        let row_clicks = Rc::new(Cell::new(0));
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let root = mount(HarnessProps {
            rows: rows(3),
            mode: TableMode::SelfManaged,
            on_row_click: Some({
                let row_clicks = row_clicks.clone();
                Callback::from(move |_: Row| row_clicks.set(row_clicks.get() + 1))
            }),
            on_delete: Some({
                let deleted = deleted.clone();
                Callback::from(move |row: Row| deleted.borrow_mut().push(row.id))
            }),
        })
        .await;

        find(&root, "tbody tr:first-child button.delete").click();
        TimeoutFuture::new(0).await;
        assert_eq!(*deleted.borrow(), vec![1]);
        assert_eq!(row_clicks.get(), 0);

        find(&root, "tbody tr:first-child td").click();
        TimeoutFuture::new(0).await;
        assert_eq!(row_clicks.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_empty_row_spans_actions_column() {
        let root = mount(HarnessProps {
            rows: rows(0),
            mode: TableMode::SelfManaged,
            on_row_click: None,
            on_delete: Some(Callback::from(|_: Row| ())),
        })
        .await;

        let cell = find(&root, "td.empty-row");
        assert_eq!(cell.get_attribute("colspan").as_deref(), Some("3"));
        assert_eq!(cell.text_content().as_deref(), Some("No data available"));
    }

    #[wasm_bindgen_test]
    async fn test_external_links_keep_query_and_report_page() {
        BrowserHistory::new().replace("/admin/reports?status=Pending&page=2");
        let requested = Rc::new(Cell::new(0));
        let page = ExternalPage {
            current_page: 2,
            total_pages: 5,
            total_items: 47,
        };
        let root = mount(HarnessProps {
            rows: rows(10),
            mode: TableMode::External {
                page,
                on_page_change: Some({
                    let requested = requested.clone();
                    Callback::from(move |page: usize| requested.set(page))
                }),
            },
            on_row_click: None,
            on_delete: None,
        })
        .await;

        assert_eq!(
            find(&root, ".pagination-summary").text_content().as_deref(),
            Some("Showing 11 to 20 of 47 results")
        );
        let link = page_link(&root, "3");
        assert_eq!(
            link.get_attribute("href").as_deref(),
            Some("/admin/reports?status=Pending&page=3")
        );
        assert!(click_default_prevented(&link));
        assert_eq!(requested.get(), 3);
        assert!(root.query_selector("th .sort-indicator").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_external_links_without_callback_navigate_normally() {
        BrowserHistory::new().replace("/admin/reports");
        let root = mount(HarnessProps {
            rows: rows(10),
            mode: TableMode::External {
                page: ExternalPage {
                    current_page: 1,
                    total_pages: 3,
                    total_items: 25,
                },
                on_page_change: None,
            },
            on_row_click: None,
            on_delete: None,
        })
        .await;

        let link = page_link(&root, "2");
        assert_eq!(link.get_attribute("href").as_deref(), Some("/admin/reports?page=2"));
        assert!(!click_default_prevented(&link));
    }
}
