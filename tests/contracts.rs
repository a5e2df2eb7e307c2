extern crate minuta;
use minuta::{
    catalog, render, build_co_buyer_context,
    Broker, ContextBuilder, DataContext, Error, Installment, Party, PaymentPlan, Property,
    Settings, TemplateMap, TemplateStore,
    CO_BUYER_BLOCK, SIGNATURE_BLOCK
};

use std::fs;
use tempfile::tempdir;


fn lead() -> Party {
    Party {
        nome: "Ana Souza".to_owned(),
        cpf: "111.222.333-44".to_owned(),
        rg: "1.234.567".to_owned(),
        nacionalidade: "brasileira".to_owned(),
        estado_civil: "casada".to_owned(),
        profissao: "engenheira".to_owned(),
        endereco: "Rua das Flores, 10, Recife/PE".to_owned(),
        email: "ana@example.com".to_owned(),
        telefone: "(81) 99999-0000".to_owned(),
    }
}

fn co_buyers() -> Vec<Party> {
    vec![
        Party { nome: "Bia Lima".to_owned(), cpf: "555.666.777-88".to_owned(), ..Party::default() },
        Party { nome: "Caio Lima".to_owned(), cpf: "999.000.111-22".to_owned(), ..Party::default() },
    ]
}

fn full_context(settings: &Settings) -> DataContext {
    let lead = lead();
    let co_buyers = co_buyers();
    let broker = Broker { nome: "Rui".to_owned(), creci: "12345-F".to_owned(), ..Broker::default() };
    let property = Property {
        titulo: "Apartamento 101".to_owned(),
        matricula: "12.345".to_owned(),
        valor: "R$ 350.000,00".to_owned(),
        ..Property::default()
    };
    let plan = PaymentPlan {
        valor_total: "R$ 350.000,00".to_owned(),
        entrada: "R$ 50.000,00".to_owned(),
        forma_pagamento: "parcelado".to_owned(),
        parcelas: vec![Installment {
            numero: "1".to_owned(),
            vencimento: "10/11/2026".to_owned(),
            valor: "R$ 300.000,00".to_owned(),
        }],
    };
    ContextBuilder::new(settings)
        .lead(&lead)
        .broker(&broker)
        .property(&property)
        .payment_plan(&plan)
        .co_buyers(&co_buyers)
        .build()
}


#[test]
fn every_generated_key_is_in_catalog() {
    let context = full_context(&Settings::default());
    let unknown = context.keys()
        .filter(|key| !catalog::is_known(key))
        .collect::<Vec<_>>();
    assert!(unknown.is_empty(), "keys missing from catalog: {:?}", unknown);
}

#[test]
fn default_blocks_qualify_every_co_buyer() {
    let context = full_context(&Settings::default());
    let block = context.get(CO_BUYER_BLOCK).unwrap();
    assert!(block.starts_with("<p><strong>COADQUIRENTE 1:</strong> Bia Lima,"));
    assert!(block.contains("<strong>COADQUIRENTE 2:</strong> Caio Lima,"));
    assert!(block.contains("CPF sob o nº 999.000.111-22"));
    let signatures = context.get(SIGNATURE_BLOCK).unwrap();
    assert_eq!(signatures.matches("class=\"assinatura\"").count(), 3);
    assert!(signatures.find("Ana Souza").unwrap() < signatures.find("Bia Lima").unwrap());
}

#[test]
fn render_contract_from_store() -> Result<(), Error> {
    let mut store = TemplateMap::new();
    store.load(
        "contrato",
        "<h1>{{imovel_titulo}}</h1><p>{{cliente_nome}}, {{cliente_profissao}}</p>\
         <p>{{coadquirente1_nome}}; {{coadquirente2_nome}}; {{coadquirente3_nome}}</p>\
         <p>{{pagamento_entrada}} + {{quantidade_parcelas}}x</p>\
         <p>Corretor: {{corretor_nome}} ({{corretor_creci}})</p>"
    );
    let context = full_context(&Settings::default());
    let result = store.render("contrato", &context)?;
    assert_eq!(
        result,
        "<h1>Apartamento 101</h1><p>Ana Souza, engenheira</p>\
         <p>Bia Lima; Caio Lima; </p>\
         <p>R$ 50.000,00 + 1x</p>\
         <p>Corretor: Rui (12345-F)</p>"
    );
    assert!(catalog::unknown_placeholders(store.get("contrato").unwrap()).is_empty());
    Ok(())
}

#[test]
fn unknown_template_is_reported_before_rendering() {
    let store = TemplateMap::new();
    let result = store.render("proposta", &DataContext::new());
    assert!(matches!(result, Err(Error::TemplateNotFound(name)) if name == "proposta"));
}

#[test]
fn templates_and_settings_from_files() -> Result<(), Error> {
    let dir = tempdir()?;
    fs::write(dir.path().join("proposta.html"), "<p>{{coadquirente1_nome}}|{{coadquirente2_nome}}</p>")?;
    fs::write(dir.path().join("notas.txt"), "{{ignorado}}")?;
    fs::write(
        dir.path().join("settings.yml"),
        "max_co_buyers: 1\nco_buyer_block: '<li>{{indice}} {{nome}}</li>'\n"
    )?;

    let store = TemplateMap::load_dir(dir.path())?;
    assert_eq!(store.names().collect::<Vec<_>>(), vec!["proposta"]);

    let settings = Settings::load(dir.path().join("settings.yml"))?;
    assert_eq!(settings.max_co_buyers, 1);
    let context = full_context(&settings);
    assert_eq!(store.render("proposta", &context)?, "<p>Bia Lima|</p>");
    assert_eq!(context.get(CO_BUYER_BLOCK), Some("<li>1 Bia Lima</li><li>2 Caio Lima</li>"));
    Ok(())
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = Settings::load(dir.path().join("ausente.yml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn co_buyer_context_alone() {
    let context = build_co_buyer_context(&co_buyers(), 4);
    let text = render(
        "{{coadquirente1_cpf}} {{coadquirente2_cpf}} {{quantidade_coadquirentes}}{{cliente_nome}}",
        &context
    );
    assert_eq!(text, "555.666.777-88 999.000.111-22 2");
}

#[test]
fn json_document_as_context() -> Result<(), Error> {
    let context = DataContext::from_json_str(
        r#"{"cliente": {"nome": "Ana"}, "coadquirente": [{"nome": "Bia"}]}"#
    )?;
    assert_eq!(render("{{cliente_nome}} & {{coadquirente1_nome}}", &context), "Ana & Bia");
    Ok(())
}
