use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::Result;


/// Slot limits and the per-item templates used to assemble block keys.
///
/// Item templates see the fields of one record plus `indice`, its 1-based
/// position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_co_buyers: usize,
    pub max_installments: usize,
    pub co_buyer_block: String,
    pub installment_block: String,
    pub signature_block: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_co_buyers: 5,
            max_installments: 12,
            co_buyer_block: concat!(
                "<p><strong>COADQUIRENTE {{indice}}:</strong> {{nome}}, {{nacionalidade}}, ",
                "{{estado_civil}}, {{profissao}}, portador(a) do RG nº {{rg}}, inscrito(a) no ",
                "CPF sob o nº {{cpf}}, residente e domiciliado(a) em {{endereco}}.</p>"
            ).to_owned(),
            installment_block:
                "<tr><td>{{numero}}</td><td>{{vencimento}}</td><td>{{valor}}</td></tr>".to_owned(),
            signature_block: concat!(
                "<div class=\"assinatura\"><p>______________________________________</p>",
                "<p>{{nome}}</p><p>CPF: {{cpf}}</p></div>"
            ).to_owned(),
        }
    }
}

impl Settings {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str::<Settings>(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let settings = Self::from_yaml(&text)?;
        debug!(
            path = %path.display(),
            max_co_buyers = settings.max_co_buyers,
            max_installments = settings.max_installments,
            "settings loaded"
        );
        Ok(settings)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("max_co_buyers: 2\n").unwrap();
        assert_eq!(settings.max_co_buyers, 2);
        assert_eq!(settings.max_installments, 12);
        assert_eq!(settings.signature_block, Settings::default().signature_block);
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Settings::from_yaml("max_co_buyers: muitos\n").is_err());
    }
}
