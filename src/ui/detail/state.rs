use crate::model::{ItemPatch, PatchErrors};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailField {
    #[default]
    Price,
    Stock,
}

impl DetailField {
    pub fn other(&self) -> DetailField {
        match self {
            DetailField::Price => DetailField::Stock,
            DetailField::Stock => DetailField::Price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailDialogState {
    #[default]
    Hidden,
    Visible {
        item_id: String,
        price: String,
        stock: String,
        focused: DetailField,
        price_touched: bool,
        stock_touched: bool,
    },
}

impl UiState for DetailDialogState {}

impl DetailDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::Visible { item_id, .. } => Some(item_id),
            Self::Hidden => None,
        }
    }

    /// Validate the current field text.
    pub fn patch(&self) -> Option<Result<ItemPatch, PatchErrors>> {
        match self {
            Self::Visible { price, stock, .. } => Some(ItemPatch::parse(price, stock)),
            Self::Hidden => None,
        }
    }

    /// Errors to display: only for fields the user has touched.
    pub fn visible_errors(&self) -> PatchErrors {
        let Self::Visible {
            price_touched,
            stock_touched,
            ..
        } = self
        else {
            return PatchErrors::default();
        };
        match self.patch() {
            Some(Err(errors)) => PatchErrors {
                price: errors.price.filter(|_| *price_touched),
                stock: errors.stock.filter(|_| *stock_touched),
            },
            _ => PatchErrors::default(),
        }
    }

    pub fn can_save(&self) -> bool {
        matches!(self.patch(), Some(Ok(_)))
    }
}
