mod gstr1;
mod order_record;

pub use gstr1::{Gstr1Invoice, Gstr1Item, Gstr1Report, Gstr1Summary};
pub use order_record::{OrderItemRecord, OrderRecord};
