use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::{DetailDialogState, DetailField};

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailDialogState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { item } => DetailDialogState::Visible {
                item_id: item.id,
                price: item.price.to_string(),
                stock: item.stock.to_string(),
                focused: DetailField::Price,
                price_touched: false,
                stock_touched: false,
            },

            DetailIntent::Close => DetailDialogState::Hidden,

            DetailIntent::Input(ch) => match state {
                DetailDialogState::Visible {
                    item_id,
                    mut price,
                    mut stock,
                    focused,
                    price_touched,
                    stock_touched,
                } => {
                    if !ch.is_control() {
                        match focused {
                            DetailField::Price => price.push(ch),
                            DetailField::Stock => stock.push(ch),
                        }
                    }
                    DetailDialogState::Visible {
                        item_id,
                        price,
                        stock,
                        focused,
                        price_touched,
                        stock_touched,
                    }
                }
                other => other,
            },

            DetailIntent::Backspace => match state {
                DetailDialogState::Visible {
                    item_id,
                    mut price,
                    mut stock,
                    focused,
                    price_touched,
                    stock_touched,
                } => {
                    match focused {
                        DetailField::Price => price.pop(),
                        DetailField::Stock => stock.pop(),
                    };
                    DetailDialogState::Visible {
                        item_id,
                        price,
                        stock,
                        focused,
                        price_touched,
                        stock_touched,
                    }
                }
                other => other,
            },

            DetailIntent::NextField => match state {
                DetailDialogState::Visible {
                    item_id,
                    price,
                    stock,
                    focused,
                    price_touched,
                    stock_touched,
                } => DetailDialogState::Visible {
                    item_id,
                    price,
                    stock,
                    focused: focused.other(),
                    price_touched: price_touched || focused == DetailField::Price,
                    stock_touched: stock_touched || focused == DetailField::Stock,
                },
                other => other,
            },

            DetailIntent::Submit => match state {
                DetailDialogState::Visible {
                    item_id,
                    price,
                    stock,
                    focused,
                    ..
                } => DetailDialogState::Visible {
                    item_id,
                    price,
                    stock,
                    focused,
                    price_touched: true,
                    stock_touched: true,
                },
                other => other,
            },
        }
    }
}
