use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, scrollable, text, Column, Row,
};
use iced::{Alignment, Element, Length, Task, Theme};
use iced_aw::Wrap;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trade_catalog::api::{ApiClient, ProductSource};
use trade_catalog::catalog::filter::PriceRange;
use trade_catalog::catalog::paginate::{PageSize, PageWindow};
use trade_catalog::catalog::sort::SortKey;
use trade_catalog::catalog::{CatalogLoad, LoadState, ViewController};
use trade_catalog::config::Config;
use trade_catalog::state::cart::{Cart, CartItem};
use trade_catalog::state::data::Category;
use trade_catalog::state::session::{DisplayPreferences, SessionStore, ViewMode};

mod ui;

/// Number of products in the "you may also like" strip
const RECOMMENDED_COUNT: usize = 4;

/// Main application state
struct CatalogApp {
    api: ApiClient,
    /// Criteria, sort, paging and the loaded catalog
    controller: ViewController<SessionStore>,
    /// Collection currently shown
    source: ProductSource,
    /// Subcategories for the filter sidebar
    categories: Vec<Category>,
    preferences: DisplayPreferences,
    cart: Cart,
    /// Raw text of the price inputs, applied on submit
    min_input: String,
    max_input: String,
    /// Subcategory name to select once categories arrive
    pending_category: Option<String>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A catalog fetch finished (or fell back) for the given source
    CatalogLoaded(ProductSource, CatalogLoad),
    CategoriesLoaded(Vec<Category>),
    /// Load a different product collection
    SourceSelected(ProductSource),
    Refresh,
    ToggleCategory(u32),
    MinPriceChanged(String),
    MaxPriceChanged(String),
    ApplyPriceRange,
    ClearFilters,
    SortSelected(SortKey),
    PageSizeSelected(PageSize),
    ViewModeSelected(ViewMode),
    GoToPage(usize),
    NextPage,
    PreviousPage,
    AddToCart(u32),
}

impl CatalogApp {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();

        // Without a writable data directory, criteria only live for this run
        let store = SessionStore::open(&config.data_dir)
            .or_else(|e| {
                warn!("Session store unavailable ({e}), keeping criteria in memory");
                SessionStore::open_in_memory()
            })
            .expect("Failed to initialize session store");

        let api = ApiClient::new(&config.api_base_url, config.request_timeout)
            .expect("Failed to build HTTP client");

        let preferences = store.load_preferences();
        let controller = ViewController::new(store, PageWindow::first(preferences.page_size));

        let price = controller.criteria().price;
        let source = ProductSource::default();

        info!("Trade catalog starting against {}", api.base_url());

        let app = CatalogApp {
            api,
            controller,
            source,
            categories: Vec::new(),
            preferences,
            cart: Cart::new(),
            min_input: price.min.to_string(),
            max_input: price.max.to_string(),
            pending_category: config.start_category,
            status: String::from("Loading products..."),
        };

        let tasks = Task::batch([app.load_catalog(), app.load_categories()]);
        (app, tasks)
    }

    fn load_catalog(&self) -> Task<Message> {
        let api = self.api.clone();
        let source = self.source;

        Task::perform(
            async move { CatalogLoad::from_fetch(api.fetch_products(source).await) },
            move |load| Message::CatalogLoaded(source, load),
        )
    }

    fn load_categories(&self) -> Task<Message> {
        let api = self.api.clone();

        Task::perform(
            async move { api.fetch_subcategories().await },
            Message::CategoriesLoaded,
        )
    }

    /// Keep the price inputs in step with the controller's criteria
    fn sync_price_inputs(&mut self) {
        let price = self.controller.criteria().price;
        self.min_input = price.min.to_string();
        self.max_input = price.max.to_string();
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(source, load) => {
                // A fetch for a collection we already left
                if source != self.source {
                    return Task::none();
                }

                self.controller.finish_load(load);
                self.status = match self.controller.state() {
                    LoadState::ReadyFallback => {
                        String::from("Marketplace unreachable, showing sample products.")
                    }
                    _ => format!("Showing {source}."),
                };

                Task::none()
            }
            Message::CategoriesLoaded(categories) => {
                self.categories = categories;

                if let Some(name) = self.pending_category.take() {
                    if !self.controller.select_category_named(&name, &self.categories) {
                        warn!("Start category {name:?} not found");
                    }
                }

                Task::none()
            }
            Message::SourceSelected(source) => {
                self.source = source;
                self.controller.begin_refresh();
                self.status = format!("Loading {source}...");
                self.load_catalog()
            }
            Message::Refresh => {
                self.controller.begin_refresh();
                self.status = String::from("Refreshing...");
                self.load_catalog()
            }
            Message::ToggleCategory(id) => {
                self.controller.toggle_category(id);
                Task::none()
            }
            Message::MinPriceChanged(value) => {
                self.min_input = value;
                Task::none()
            }
            Message::MaxPriceChanged(value) => {
                self.max_input = value;
                Task::none()
            }
            Message::ApplyPriceRange => {
                match (self.min_input.trim().parse::<u64>(), self.max_input.trim().parse::<u64>()) {
                    (Ok(min), Ok(max)) => {
                        self.controller.set_price_range(PriceRange::new(min, max));
                    }
                    _ => {
                        self.status = String::from("Prices must be whole numbers.");
                    }
                }
                Task::none()
            }
            Message::ClearFilters => {
                self.controller.clear_filters();
                self.sync_price_inputs();
                Task::none()
            }
            Message::SortSelected(key) => {
                self.controller.set_sort(key);
                Task::none()
            }
            Message::PageSizeSelected(size) => {
                self.controller.set_page_size(size);
                self.preferences.page_size = size;
                if let Err(e) = self.controller.store().save_page_size(size) {
                    warn!("Failed to save page size: {e}");
                }
                Task::none()
            }
            Message::ViewModeSelected(view) => {
                self.preferences.view = view;
                if let Err(e) = self.controller.store().save_view_mode(view) {
                    warn!("Failed to save view mode: {e}");
                }
                Task::none()
            }
            Message::GoToPage(page) => {
                self.controller.set_page(page);
                Task::none()
            }
            Message::NextPage => {
                self.controller.next_page();
                Task::none()
            }
            Message::PreviousPage => {
                self.controller.previous_page();
                Task::none()
            }
            Message::AddToCart(product_id) => {
                let product = self
                    .controller
                    .catalog()
                    .iter()
                    .find(|p| p.product_id == product_id);

                if let Some(product) = product {
                    self.cart.add(CartItem::from(product));
                    self.status = format!("Added {} to cart.", product.product_name);
                }
                Task::none()
            }
        }
    }

    fn toolbar<'a>(&'a self) -> Element<'a, Message> {
        let view_toggle = row![
            button(text("Grid")).on_press(Message::ViewModeSelected(ViewMode::Grid)),
            button(text("List")).on_press(Message::ViewModeSelected(ViewMode::List)),
        ]
        .spacing(4);

        let page_sizes = Row::with_children(PageSize::ALL.into_iter().map(|size| -> Element<'a, Message> {
            let label = if size == self.controller.window().size {
                format!("[{size}]")
            } else {
                size.to_string()
            };
            button(text(label))
                .on_press(Message::PageSizeSelected(size))
                .into()
        }))
        .spacing(4);

        row![
            view_toggle,
            text(format!("{} results", self.controller.results_count())),
            horizontal_space(),
            text("Sort by:"),
            pick_list(
                SortKey::ALL.to_vec(),
                Some(self.controller.sort()),
                Message::SortSelected,
            ),
            page_sizes,
            button(text("Refresh")).on_press(Message::Refresh),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }

    fn products(&self) -> Element<Message> {
        let page = self.controller.page();

        if self.controller.state() == LoadState::Loading {
            return text("Loading products...").into();
        }
        if page.is_empty() {
            return text("No products match these filters.").into();
        }

        match self.preferences.view {
            ViewMode::Grid => Wrap::with_elements(page.iter().map(ui::product_card::card).collect())
                .spacing(12.0)
                .line_spacing(12.0)
                .into(),
            ViewMode::List => Column::with_children(page.iter().map(ui::product_card::list_row))
                .spacing(8)
                .into(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let sidebar = ui::filter_panel::view(
            &self.categories,
            self.controller.criteria(),
            &self.min_input,
            &self.max_input,
        );

        let recommended = Row::with_children(
            self.controller
                .recommended(RECOMMENDED_COUNT)
                .into_iter()
                .map(ui::product_card::card),
        )
        .spacing(12);

        let main = column![
            self.toolbar(),
            self.products(),
            ui::pagination::view(self.controller.window().page(), self.controller.total_pages()),
            text("You may also like").size(22),
            recommended,
            text(format!("Cart: {} item(s) · {}", self.cart.len(), self.status)).size(14),
        ]
        .spacing(20)
        .width(Length::Fill);

        container(row![sidebar, scrollable(main).height(Length::Fill)].spacing(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    iced::application("Trade Catalog", CatalogApp::update, CatalogApp::view)
        .theme(CatalogApp::theme)
        .centered()
        .run_with(CatalogApp::new)
}
