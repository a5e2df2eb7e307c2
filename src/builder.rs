use tracing::{trace, warn};
use crate::{DataContext, Settings, Template};
use crate::records::{Broker, Fields, Party, PaymentPlan, Property};

pub const CO_BUYER_BLOCK: &str = "bloco_html_coadquirentes";
pub const SIGNATURE_BLOCK: &str = "bloco_assinaturas_compradores";
pub const INSTALLMENT_BLOCK: &str = "bloco_html_parcelas";
pub const CO_BUYER_COUNT: &str = "quantidade_coadquirentes";
pub const INSTALLMENT_COUNT: &str = "quantidade_parcelas";


/// Assembles the flat context of a proposal or contract from deal records.
///
/// Repeated groups get indexed keys (`coadquirente1_nome`, `parcela3_valor`)
/// up to the slot limits of [`Settings`], a count key, and a block key
/// holding every item rendered through the matching item template.
/// Entries given with [`ContextBuilder::value`] are applied last.
pub struct ContextBuilder<'a> {
    settings: &'a Settings,
    context: DataContext,
    extras: DataContext,
    lead: Option<&'a Party>,
    co_buyers: &'a [Party],
}

impl<'a> ContextBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        ContextBuilder {
            settings,
            context: DataContext::new(),
            extras: DataContext::new(),
            lead: None,
            co_buyers: &[],
        }
    }

    pub fn lead(mut self, lead: &'a Party) -> Self {
        insert_fields(&mut self.context, "cliente", lead);
        self.lead = Some(lead);
        self
    }

    pub fn broker(mut self, broker: &Broker) -> Self {
        insert_fields(&mut self.context, "corretor", broker);
        self
    }

    pub fn property(mut self, property: &Property) -> Self {
        insert_fields(&mut self.context, "imovel", property);
        self
    }

    pub fn payment_plan(mut self, plan: &PaymentPlan) -> Self {
        insert_fields(&mut self.context, "pagamento", plan);
        let group = Group {
            prefix: "parcela",
            max_slots: self.settings.max_installments,
            count_key: INSTALLMENT_COUNT,
            block_key: INSTALLMENT_BLOCK,
            item_template: &self.settings.installment_block,
        };
        group.insert(&mut self.context, &plan.parcelas);
        self
    }

    pub fn co_buyers(mut self, co_buyers: &'a [Party]) -> Self {
        let group = Group {
            prefix: "coadquirente",
            max_slots: self.settings.max_co_buyers,
            count_key: CO_BUYER_COUNT,
            block_key: CO_BUYER_BLOCK,
            item_template: &self.settings.co_buyer_block,
        };
        group.insert(&mut self.context, co_buyers);
        self.co_buyers = co_buyers;
        self
    }

    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key, value);
        self
    }

    pub fn build(self) -> DataContext {
        let ContextBuilder { settings, mut context, extras, lead, co_buyers } = self;
        let signers = lead.into_iter().chain(co_buyers);
        let signatures = render_block(&Template::from(&settings.signature_block), signers);
        context.insert(SIGNATURE_BLOCK, signatures);
        context.extend(extras);
        trace!(entries = context.len(), "context built");
        context
    }
}


/// Context for the co-buyers of a deal alone, with at most `max_slots`
/// indexed co-buyers and the default block templates.
pub fn build_co_buyer_context(co_buyers: &[Party], max_slots: usize) -> DataContext {
    let settings = Settings {
        max_co_buyers: max_slots,
        ..Settings::default()
    };
    ContextBuilder::new(&settings).co_buyers(co_buyers).build()
}


struct Group<'s> {
    prefix: &'static str,
    max_slots: usize,
    count_key: &'static str,
    block_key: &'static str,
    item_template: &'s str,
}

impl Group<'_> {
    fn insert<T: Fields>(&self, context: &mut DataContext, items: &[T]) {
        if items.len() > self.max_slots {
            warn!(
                group = self.prefix,
                count = items.len(),
                max_slots = self.max_slots,
                "indexed keys truncated to the slot limit"
            );
        }
        for (index, item) in items.iter().take(self.max_slots).enumerate() {
            for (field, value) in item.fields() {
                context.insert(format!("{}{}_{}", self.prefix, index + 1, field), value);
            }
        }
        context.insert(self.count_key, items.len().to_string());
        context.insert(self.block_key, render_block(&Template::from(self.item_template), items));
    }
}

fn insert_fields(context: &mut DataContext, prefix: &str, record: &impl Fields) {
    for (field, value) in record.fields() {
        context.insert(format!("{}_{}", prefix, field), value);
    }
}

fn render_block<'i, T: Fields + 'i>(
    template: &Template, items: impl IntoIterator<Item = &'i T>
) -> String {
    items.into_iter()
        .enumerate()
        .map(|(index, item)| {
            let mut context = item.fields().into_iter().collect::<DataContext>();
            context.insert("indice", (index + 1).to_string());
            template.render(&context)
        })
        .collect()
}
