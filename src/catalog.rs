//! Reference list of the placeholders template authors can use.
//!
//! The renderer does not enforce the catalog: a key missing from the data
//! context renders as empty text whether or not it is listed here.
use crate::Template;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderInfo {
    /// Key, or key pattern where `{N}` stands for a 1-based slot number.
    pub key: &'static str,
    pub description: &'static str,
}

const fn info(key: &'static str, description: &'static str) -> PlaceholderInfo {
    PlaceholderInfo { key, description }
}

static CATALOG: &[PlaceholderInfo] = &[
    info("cliente_nome", "Nome completo do cliente"),
    info("cliente_cpf", "CPF do cliente"),
    info("cliente_rg", "RG do cliente"),
    info("cliente_nacionalidade", "Nacionalidade do cliente"),
    info("cliente_estado_civil", "Estado civil do cliente"),
    info("cliente_profissao", "Profissão do cliente"),
    info("cliente_endereco", "Endereço do cliente"),
    info("cliente_email", "E-mail do cliente"),
    info("cliente_telefone", "Telefone do cliente"),
    info("corretor_nome", "Nome do corretor"),
    info("corretor_creci", "CRECI do corretor"),
    info("corretor_email", "E-mail do corretor"),
    info("corretor_telefone", "Telefone do corretor"),
    info("imovel_titulo", "Título do imóvel"),
    info("imovel_endereco", "Endereço do imóvel"),
    info("imovel_matricula", "Matrícula do imóvel"),
    info("imovel_valor", "Valor do imóvel"),
    info("pagamento_valor_total", "Valor total da negociação"),
    info("pagamento_entrada", "Valor da entrada"),
    info("pagamento_forma_pagamento", "Forma de pagamento"),
    info("parcela{N}_numero", "Número da parcela N"),
    info("parcela{N}_vencimento", "Vencimento da parcela N"),
    info("parcela{N}_valor", "Valor da parcela N"),
    info("quantidade_parcelas", "Quantidade de parcelas"),
    info("bloco_html_parcelas", "Tabela HTML com todas as parcelas"),
    info("coadquirente{N}_nome", "Nome do coadquirente N"),
    info("coadquirente{N}_cpf", "CPF do coadquirente N"),
    info("coadquirente{N}_rg", "RG do coadquirente N"),
    info("coadquirente{N}_nacionalidade", "Nacionalidade do coadquirente N"),
    info("coadquirente{N}_estado_civil", "Estado civil do coadquirente N"),
    info("coadquirente{N}_profissao", "Profissão do coadquirente N"),
    info("coadquirente{N}_endereco", "Endereço do coadquirente N"),
    info("coadquirente{N}_email", "E-mail do coadquirente N"),
    info("coadquirente{N}_telefone", "Telefone do coadquirente N"),
    info("quantidade_coadquirentes", "Quantidade de coadquirentes"),
    info("bloco_html_coadquirentes", "Qualificação de todos os coadquirentes"),
    info("bloco_assinaturas_compradores", "Assinaturas do cliente e dos coadquirentes"),
];

pub fn catalog() -> &'static [PlaceholderInfo] {
    CATALOG
}

pub fn is_known(key: &str) -> bool {
    CATALOG.iter().any(|info| matches_pattern(info.key, key))
}

/// Keys used by `template` that the catalog does not describe.
pub fn unknown_placeholders(template: &Template) -> Vec<&str> {
    template.placeholders()
        .into_iter()
        .filter(|key| !is_known(key))
        .collect()
}

fn matches_pattern(pattern: &str, key: &str) -> bool {
    match pattern.split_once("{N}") {
        None => pattern == key,
        Some((before, after)) => {
            let Some(rest) = key.strip_prefix(before) else {
                return false;
            };
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            digits > 0 && !rest.starts_with('0') && &rest[digits..] == after
        }
    }
}
