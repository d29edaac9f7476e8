//! # Views
//!
//! Each view renders to an [`Element`] tree and exposes its clicks as methods.
//!
//! ## View Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         View Modules                                    │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  product_list    │  │  cart_panel      │  │  page                │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  • mount         │  │  • click_close   │  │  • mount             │  │
//! │  │  • search        │  │  • click_clear   │  │  • toggle_cart       │  │
//! │  │  • cards         │  │  • items         │  │  • render            │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  product_card    │  │  cart_item       │  │  search              │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  • add_to_cart   │  │  • increment     │  │  • set_value         │  │
//! │  │                  │  │  • decrement     │  │  • submit            │  │
//! │  │                  │  │  • remove        │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cart Access
//! Views never own a cart. The product card only needs [`CartActions`];
//! views that show cart contents hold a [`CartManager`] handle.
//!
//! [`CartActions`]: crate::state::CartActions
//! [`CartManager`]: crate::state::CartManager

pub mod cart_item;
pub mod cart_panel;
pub mod node;
pub mod page;
pub mod product_card;
pub mod product_list;
pub mod search;

pub use cart_item::CartItemView;
pub use cart_panel::{cart_total, CartPanelEvent, CartPanelView, EMPTY_CART_MESSAGE};
pub use node::Element;
pub use page::StorefrontPage;
pub use product_card::ProductCardView;
pub use product_list::{LoadState, ProductListView, LOAD_ERROR_MESSAGE};
pub use search::SearchView;
