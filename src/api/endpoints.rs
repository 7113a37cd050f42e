use std::fmt;

/// Which product collection a catalog view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSource {
    #[default]
    All,
    Company(u32),
    Category(u32),
}

impl ProductSource {
    pub fn url(&self, base_url: &str) -> String {
        match self {
            ProductSource::All => format!("{base_url}/product/all"),
            ProductSource::Company(id) => format!("{base_url}/product/get-by-company-id/{id}"),
            ProductSource::Category(id) => format!("{base_url}/product/all?categoryId={id}"),
        }
    }
}

impl fmt::Display for ProductSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSource::All => write!(f, "all products"),
            ProductSource::Company(id) => write!(f, "products of company {id}"),
            ProductSource::Category(id) => write!(f, "products in category {id}"),
        }
    }
}

pub fn categories_url(base_url: &str) -> String {
    format!("{base_url}/Category/all")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_urls() {
        let base = "https://api.example.com/api";
        assert_eq!(ProductSource::All.url(base), "https://api.example.com/api/product/all");
        assert_eq!(
            ProductSource::Company(4).url(base),
            "https://api.example.com/api/product/get-by-company-id/4"
        );
        assert_eq!(
            ProductSource::Category(2).url(base),
            "https://api.example.com/api/product/all?categoryId=2"
        );
        assert_eq!(categories_url(base), "https://api.example.com/api/Category/all");
    }
}
