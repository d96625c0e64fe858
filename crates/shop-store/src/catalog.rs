//! Product catalog slice: the full product list, the two filter inputs, and the
//! memoized visible subsequence derived from them.

use std::convert::Infallible;

use indexmap::IndexSet;
use shop_contracts::{CATEGORY_ALL, CatalogEvent, Product, ProductId, ViewMode};

use crate::reducer::{Reducer, ReducerCtx};

#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
    categories: Vec<String>,
    search_query: String,
    selected_category: String,
    view_mode: ViewMode,
    loading: bool,
    /// Indices into `products`, ascending. Rebuilt whenever products or a filter input change.
    visible: Vec<usize>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: vec![CATEGORY_ALL.to_string()],
            search_query: String::new(),
            selected_category: CATEGORY_ALL.to_string(),
            view_mode: ViewMode::default(),
            loading: false,
            visible: Vec::new(),
        }
    }
}

impl CatalogState {
    /// Replace the product list. Search query and category are kept and reapplied.
    pub fn load_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.categories = derive_categories(&self.products);
        self.refilter();
    }

    pub fn add_product(&mut self, product: Product) {
        let mut products = std::mem::take(&mut self.products);
        products.push(product);
        self.load_products(products);
    }

    pub fn remove_product(&mut self, id: &ProductId) {
        let mut products = std::mem::take(&mut self.products);
        products.retain(|product| &product.id != id);
        self.load_products(products);
    }

    /// Stored verbatim; case folding happens in the predicate.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
        self.refilter();
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.refilter();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// `"all"` first, then each distinct category in first-appearance order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn visible_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.visible.iter().map(|&idx| &self.products[idx])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Visible products flagged for promotion, in catalog order.
    pub fn featured_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.visible_products().filter(|product| product.is_featured())
    }

    fn refilter(&mut self) {
        self.visible = filter_products(
            &self.products,
            &self.search_query,
            &self.selected_category,
        );
    }
}

/// Indices of the products passing both the search and category predicates.
///
/// The result is strictly ascending, so it always describes an order-preserving
/// subsequence of `products`.
pub fn filter_products(products: &[Product], query: &str, category: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| {
            matches_search(product, &needle) && matches_category(product, category)
        })
        .map(|(idx, _)| idx)
        .collect()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

fn matches_category(product: &Product, category: &str) -> bool {
    category == CATEGORY_ALL || product.category == category
}

fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut seen = IndexSet::new();
    seen.insert(CATEGORY_ALL);
    for product in products {
        seen.insert(product.category.as_str());
    }
    seen.into_iter().map(str::to_string).collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Event = CatalogEvent;
    type Error = Infallible;

    fn reduce(
        &mut self,
        event: Self::Event,
        ctx: &mut ReducerCtx<'_, Self::State>,
    ) -> Result<(), Self::Error> {
        let catalog = &mut *ctx.state;
        match event {
            CatalogEvent::LoadProducts(products) => catalog.load_products(products),
            CatalogEvent::AddProduct(product) => catalog.add_product(product),
            CatalogEvent::RemoveProduct(id) => catalog.remove_product(&id),
            CatalogEvent::SetSearchQuery(text) => catalog.set_search_query(text),
            CatalogEvent::SetSelectedCategory(category) => catalog.set_selected_category(category),
            CatalogEvent::SetViewMode(mode) => catalog.set_view_mode(mode),
            CatalogEvent::ToggleViewMode => catalog.toggle_view_mode(),
            CatalogEvent::SetLoading(loading) => catalog.set_loading(loading),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: format!("{name} description"),
            category: category.into(),
            price: 10.0,
            rating: 4.0,
            in_stock: true,
            ..Product::default()
        }
    }

    fn ids<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(|product| product.id.as_str()).collect()
    }

    #[test]
    fn starts_empty_with_all_sentinel() {
        let catalog = CatalogState::default();
        assert_eq!(catalog.categories(), ["all"]);
        assert_eq!(catalog.selected_category(), "all");
        assert_eq!(catalog.visible_count(), 0);
        assert_eq!(catalog.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn categories_are_deduplicated_in_first_appearance_order() {
        let mut catalog = CatalogState::default();
        catalog.load_products(vec![
            product("1", "Laptop", "Electronics"),
            product("2", "Shirt", "Clothing"),
            product("3", "Phone", "Electronics"),
            product("4", "Mug", "Home & Kitchen"),
        ]);
        assert_eq!(
            catalog.categories(),
            ["all", "Electronics", "Clothing", "Home & Kitchen"]
        );
    }

    #[test]
    fn category_filter_keeps_catalog_order() {
        let mut catalog = CatalogState::default();
        catalog.load_products(vec![
            product("1", "Laptop", "A"),
            product("2", "Shirt", "B"),
            product("3", "Phone", "A"),
        ]);
        catalog.set_selected_category("A");
        assert_eq!(ids(catalog.visible_products()), ["1", "3"]);

        catalog.set_selected_category("all");
        assert_eq!(ids(catalog.visible_products()), ["1", "2", "3"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let mut catalog = CatalogState::default();
        let mut hat = product("2", "Hat", "Clothing");
        hat.description = "Wool beanie".into();
        let mut socks = product("3", "Socks", "Clothing");
        socks.description = "Pairs well with SHOES".into();
        catalog.load_products(vec![product("1", "Running Shoes", "Footwear"), hat, socks]);

        catalog.set_search_query("shoe");
        assert_eq!(ids(catalog.visible_products()), ["1", "3"]);

        catalog.set_search_query("SHOE");
        assert_eq!(ids(catalog.visible_products()), ["1", "3"]);
        assert_eq!(catalog.search_query(), "SHOE");
    }

    #[test]
    fn search_and_category_must_both_hold() {
        let mut catalog = CatalogState::default();
        catalog.load_products(vec![
            product("1", "Running Shoes", "Footwear"),
            product("2", "Shoe Polish", "Care"),
        ]);
        catalog.set_search_query("shoe");
        catalog.set_selected_category("Care");
        assert_eq!(ids(catalog.visible_products()), ["2"]);
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let mut catalog = CatalogState::default();
        catalog.load_products(vec![product("1", "Laptop", "Electronics")]);
        catalog.set_selected_category("Garden");
        assert_eq!(catalog.visible_count(), 0);
    }

    #[test]
    fn reload_reapplies_existing_filters() {
        let mut catalog = CatalogState::default();
        catalog.set_selected_category("B");
        catalog.set_search_query("lamp");
        catalog.load_products(vec![
            product("1", "Desk Lamp", "A"),
            product("2", "Floor Lamp", "B"),
            product("3", "Rug", "B"),
        ]);
        assert_eq!(catalog.selected_category(), "B");
        assert_eq!(ids(catalog.visible_products()), ["2"]);
    }

    #[test]
    fn add_and_remove_product_refresh_categories_and_view() {
        let mut catalog = CatalogState::default();
        catalog.load_products(vec![product("1", "Laptop", "Electronics")]);
        catalog.add_product(product("2", "Yoga Mat", "Sports"));
        assert_eq!(catalog.categories(), ["all", "Electronics", "Sports"]);
        assert_eq!(ids(catalog.visible_products()), ["1", "2"]);

        catalog.remove_product(&ProductId::from("1"));
        assert_eq!(catalog.categories(), ["all", "Sports"]);
        assert_eq!(ids(catalog.visible_products()), ["2"]);

        catalog.remove_product(&ProductId::from("missing"));
        assert_eq!(catalog.all_products().len(), 1);
    }

    #[test]
    fn featured_products_follow_the_visible_view() {
        let mut catalog = CatalogState::default();
        let mut laptop = product("1", "Laptop", "Electronics");
        laptop.featured = Some(true);
        let mut shirt = product("2", "Shirt", "Clothing");
        shirt.featured = Some(true);
        catalog.load_products(vec![laptop, shirt, product("3", "Phone", "Electronics")]);

        assert_eq!(ids(catalog.featured_products()), ["1", "2"]);
        catalog.set_selected_category("Clothing");
        assert_eq!(ids(catalog.featured_products()), ["2"]);
    }

    #[test]
    fn filter_products_yields_ascending_indices() {
        let products = vec![
            product("1", "Alpha", "A"),
            product("2", "Beta", "B"),
            product("3", "Alphabet", "A"),
            product("4", "Gamma", "A"),
        ];
        let idx = filter_products(&products, "alpha", "all");
        assert_eq!(idx, vec![0, 2]);
        assert!(idx.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(filter_products(&products, "", "A"), vec![0, 2, 3]);
        assert!(filter_products(&[], "x", "all").is_empty());
    }

    #[test]
    fn reducer_routes_view_mode_and_loading() {
        let mut catalog = CatalogState::default();
        let mut reducer = CatalogReducer;
        let out = crate::reducer::step(&mut reducer, &mut catalog, CatalogEvent::ToggleViewMode)
            .expect("reduce");
        assert!(out.is_empty());
        assert_eq!(catalog.view_mode(), ViewMode::List);

        crate::reducer::step(&mut reducer, &mut catalog, CatalogEvent::SetLoading(true))
            .expect("reduce");
        assert!(catalog.is_loading());
    }
}
