use serde::{Deserialize, Serialize};


/// Exposes a record as `(field, value)` pairs for placeholder keys.
pub trait Fields {
    fn fields(&self) -> Vec<(&'static str, &str)>;
}


/// A buyer: the lead of a deal or one of its co-buyers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub nome: String,
    pub cpf: String,
    pub rg: String,
    pub nacionalidade: String,
    pub estado_civil: String,
    pub profissao: String,
    pub endereco: String,
    pub email: String,
    pub telefone: String,
}

impl Party {
    pub fn named(nome: &str) -> Self {
        Party {
            nome: nome.to_owned(),
            ..Party::default()
        }
    }
}

impl Fields for Party {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("nome", self.nome.as_str()),
            ("cpf", self.cpf.as_str()),
            ("rg", self.rg.as_str()),
            ("nacionalidade", self.nacionalidade.as_str()),
            ("estado_civil", self.estado_civil.as_str()),
            ("profissao", self.profissao.as_str()),
            ("endereco", self.endereco.as_str()),
            ("email", self.email.as_str()),
            ("telefone", self.telefone.as_str()),
        ]
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Broker {
    pub nome: String,
    pub creci: String,
    pub email: String,
    pub telefone: String,
}

impl Fields for Broker {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("nome", self.nome.as_str()),
            ("creci", self.creci.as_str()),
            ("email", self.email.as_str()),
            ("telefone", self.telefone.as_str()),
        ]
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub titulo: String,
    pub endereco: String,
    pub matricula: String,
    pub valor: String,
}

impl Fields for Property {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("titulo", self.titulo.as_str()),
            ("endereco", self.endereco.as_str()),
            ("matricula", self.matricula.as_str()),
            ("valor", self.valor.as_str()),
        ]
    }
}


/// Values are expected already formatted for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentPlan {
    pub valor_total: String,
    pub entrada: String,
    pub forma_pagamento: String,
    pub parcelas: Vec<Installment>,
}

impl Fields for PaymentPlan {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("valor_total", self.valor_total.as_str()),
            ("entrada", self.entrada.as_str()),
            ("forma_pagamento", self.forma_pagamento.as_str()),
        ]
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Installment {
    pub numero: String,
    pub vencimento: String,
    pub valor: String,
}

impl Fields for Installment {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("numero", self.numero.as_str()),
            ("vencimento", self.vencimento.as_str()),
            ("valor", self.valor.as_str()),
        ]
    }
}
