use aquamind_schemas::{
    catalog::{AdviceEntry, AdviceOverride, Language, LocalizedText, RecommendationEntry},
    parameter::{Direction, MainType, ParameterKey},
};
use serde::Serialize;
use std::collections::HashMap;

/// A piece of advice resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    /// The catalog key the text was found under, e.g. `freshwater_ph`.
    pub key: String,
    pub direction: Direction,
    pub text: String,
}

/// Parameters whose advice differs on freshwater aquariums, mapped to the
/// catalog key holding the freshwater text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdviceOverrides {
    freshwater: HashMap<ParameterKey, String>,
}

impl AdviceOverrides {
    pub fn new(overrides: impl IntoIterator<Item = AdviceOverride>) -> Self {
        let mut table = Self::default();
        table.extend(overrides);
        table
    }

    pub fn builtin() -> Self {
        use ParameterKey::*;
        Self::new(
            [
                (Kh, "freshwater_kh"),
                (Ph, "freshwater_ph"),
                (Nitrite, "nitrite_fw"),
                (Nitrate, "nitrate_fw"),
                (No3, "nitrate_fw"),
                (Po4, "phosphate_fw"),
                (Ammonia, "ammonia_fw"),
                (Temp, "temp_fw"),
            ]
            .into_iter()
            .map(|(parameter, key)| AdviceOverride {
                parameter,
                freshwater_key: key.to_string(),
            }),
        )
    }

    pub fn extend(&mut self, overrides: impl IntoIterator<Item = AdviceOverride>) {
        for o in overrides {
            self.freshwater.insert(o.parameter, o.freshwater_key);
        }
    }

    pub fn qualified_key(&self, parameter: &ParameterKey, main_type: MainType) -> Option<&str> {
        match main_type {
            MainType::Freshwater => self.freshwater.get(parameter).map(String::as_str),
            MainType::Marine => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, &str)> {
        self.freshwater.iter().map(|(p, k)| (p, k.as_str()))
    }
}

/// Advice text per catalog key, plus the overrides that pick freshwater keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationCatalog {
    entries: HashMap<String, AdviceEntry>,
    overrides: AdviceOverrides,
}

impl RecommendationCatalog {
    pub fn new(entries: Vec<RecommendationEntry>, overrides: AdviceOverrides) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.key, e.advice)).collect(),
            overrides,
        }
    }

    /// The bilingual advice shipped with the application.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ADVICE
            .iter()
            .map(|(key, es_low, es_high, en_low, en_high)| RecommendationEntry {
                key: key.to_string(),
                advice: AdviceEntry {
                    low: Some(LocalizedText::new(es_low, en_low)),
                    high: Some(LocalizedText::new(es_high, en_high)),
                },
            })
            .collect();
        Self::new(entries, AdviceOverrides::builtin())
    }

    pub fn entry(&self, key: &str) -> Option<&AdviceEntry> {
        self.entries.get(key)
    }

    pub fn overrides(&self) -> &AdviceOverrides {
        &self.overrides
    }

    /// Looks up advice for a parameter leaving its range in `direction`.
    ///
    /// On freshwater aquariums an overridden parameter is tried under its
    /// qualified key first; the plain parameter key is the fallback.
    pub fn get_advice(
        &self,
        parameter: &ParameterKey,
        direction: Direction,
        main_type: MainType,
        language: Language,
    ) -> Option<Advice> {
        self.overrides
            .qualified_key(parameter, main_type)
            .and_then(|key| self.text_for(key, direction, language))
            .or_else(|| self.text_for(parameter.as_str(), direction, language))
    }

    /// Overlays `other`: entries with the same key and overrides for the same
    /// parameter are replaced.
    pub fn merge(&mut self, other: RecommendationCatalog) {
        self.entries.extend(other.entries);
        self.overrides.freshwater.extend(other.overrides.freshwater);
    }

    fn text_for(&self, key: &str, direction: Direction, language: Language) -> Option<Advice> {
        let text = self.entries.get(key)?.side(direction)?.get(language)?;
        Some(Advice {
            key: key.to_string(),
            direction,
            text: text.to_string(),
        })
    }
}

// (key, es low, es high, en low, en high)
const BUILTIN_ADVICE: &[(&str, &str, &str, &str, &str)] = &[
    (
        "kh",
        "Añade un buffer de KH para elevar la alcalinidad de forma gradual. Evita subidas mayores a 1 dKH por día.",
        "Reduce la dosificación de KH. Un KH muy alto puede causar quemaduras en las puntas de los corales, especialmente SPS. Ajusta lentamente y revisa el consumo diario.",
        "Add a KH buffer to increase alkalinity gradually. Avoid raising more than 1 dKH per day.",
        "Reduce KH dosing. Very high alkalinity can burn coral tips, especially SPS. Adjust slowly and track daily consumption.",
    ),
    (
        "ca",
        "Añade suplemento de calcio y verifica que el KH y el magnesio estén dentro del rango correcto para evitar desbalances.",
        "Reduce la dosificación de calcio. Niveles muy altos pueden provocar precipitación de carbonatos y desbalance con el magnesio.",
        "Add a calcium supplement and check that KH and magnesium are within the correct range to avoid imbalances.",
        "Reduce calcium dosing. Very high levels can cause carbonate precipitation and imbalance with magnesium.",
    ),
    (
        "mg",
        "Añade suplemento de magnesio. Un nivel adecuado de Mg ayuda a mantener estable el KH y el calcio.",
        "Suspende temporalmente los suplementos de magnesio y realiza cambios parciales de agua para estabilizar el nivel.",
        "Add a magnesium supplement. Proper Mg levels help keep KH and calcium stable.",
        "Temporarily stop magnesium supplements and perform partial water changes to stabilize the level.",
    ),
    (
        "no3",
        "Niveles de NO₃ extremadamente bajos pueden favorecer dinoflagelados y pérdida de color en corales. Aumenta ligeramente la alimentación o dosifica nitratos de forma controlada.",
        "Realiza cambios de agua, reduce la alimentación, limpia el skimmer y considera el uso de resinas o reactores anti-nitratos. Revisa también la carga biológica.",
        "Extremely low NO₃ can favor dinoflagellates and cause poor coral coloration. Slightly increase feeding or dose nitrates in a controlled way.",
        "Do water changes, reduce feeding, clean the skimmer and consider using nitrate-removal media or reactors. Also review stocking levels.",
    ),
    (
        "po4",
        "Mantener los fosfatos en cero absoluto puede generar problemas en corales y favorecer dinoflagelados. Intenta mantener un nivel mínimo detectable (por ejemplo 0.01–0.05 ppm).",
        "Reduce la comida, sifonea el sustrato, realiza cambios de agua y utiliza resinas o reactores específicos para fosfatos. Verifica que el agua RODI esté en 0 TDS.",
        "Keeping phosphate at absolute zero can harm corals and favor dinoflagellates. Aim for a small but detectable level (e.g. 0.01–0.05 ppm).",
        "Reduce feeding, siphon the substrate, perform water changes and use phosphate-removal resins or reactors. Make sure your RODI water reads 0 TDS.",
    ),
    (
        "ph",
        "Mejora la ventilación del ambiente, aumenta el movimiento de superficie y considera el uso de línea de aire exterior para el skimmer o un scrubber de CO₂.",
        "Un pH demasiado alto suele estar relacionado con exceso de aireación o dosificación de productos como Kalkwasser. Reduce dosis y monitorea el valor durante el día.",
        "Improve room ventilation, increase surface agitation and consider using an outside air line for the skimmer or a CO₂ scrubber.",
        "Very high pH is often related to strong aeration or dosing products such as Kalkwasser. Reduce dosing and monitor the value throughout the day.",
    ),
    (
        "salinity",
        "Aumenta la salinidad añadiendo agua salada preparada. Verifica que tu sistema de auto rellenado no esté agregando demasiada agua dulce.",
        "Reduce la salinidad retirando agua del acuario y reemplazando con agua RODI. Hazlo de forma gradual (no más de 1 ppt por día).",
        "Increase salinity by adding prepared saltwater. Check that your auto top-off is not adding too much freshwater.",
        "Lower salinity by removing tank water and replacing it with RODI water. Do it gradually (no more than 1 ppt per day).",
    ),
    (
        "temp",
        "Aumenta la temperatura de forma gradual con un calentador confiable. Evita cambios bruscos que puedan estresar a los habitantes.",
        "Temperaturas altas reducen el oxígeno disponible y estresan peces e invertebrados. Usa enfriadores, ventiladores, evita fuentes de calor externas y revisa la iluminación.",
        "Increase temperature gradually with a reliable heater. Avoid sudden swings that can stress the livestock.",
        "High temperature reduces oxygen and stresses fish and invertebrates. Use chillers or fans, avoid external heat sources and review lighting.",
    ),
    (
        "ammonia",
        "El amonio debe mantenerse siempre en 0 en un sistema estable. Si se detecta, revisa filtración biológica y carga de peces.",
        "El amonio es altamente tóxico. Realiza cambios de agua de emergencia, aumenta la oxigenación, añade bacterias beneficiosas y suspende la alimentación hasta estabilizar.",
        "Ammonia should remain at 0 in a stable system. If detected, check biological filtration and fish load.",
        "Ammonia is highly toxic. Perform emergency water changes, increase aeration, add beneficial bacteria and stop feeding until levels stabilize.",
    ),
    (
        "nitrite",
        "En sistemas maduros, los nitritos deben permanecer en 0. Si se detectan, indica problemas en el ciclo del nitrógeno.",
        "Los nitritos son muy tóxicos para los peces. Realiza cambios de agua inmediatos, añade bacterias y reduce la alimentación. Evita introducir nuevos peces mientras haya nitritos.",
        "In mature systems, nitrite should be 0. Any reading indicates a problem in the nitrogen cycle.",
        "Nitrite is very toxic to fish. Perform immediate water changes, add beneficial bacteria and reduce feeding. Avoid adding new fish while nitrite is present.",
    ),
    (
        "k",
        "Añade potasio de forma controlada. Un buen nivel de K favorece la coloración y salud de muchos corales, especialmente SPS.",
        "Reduce o suspende la dosificación de potasio. Niveles muy altos pueden causar estrés y quemaduras en tejidos de corales.",
        "Add potassium carefully. Proper K levels support coloration and health in many corals, especially SPS.",
        "Reduce or stop potassium dosing. Very high levels can stress corals and burn tissues.",
    ),
    (
        "strontium",
        "Añade estroncio siguiendo las recomendaciones del fabricante. Es importante para el crecimiento de corales duros y esqueletos calcáreos.",
        "Suspende la dosificación de estroncio y realiza cambios parciales de agua. Niveles excesivos pueden afectar negativamente a corales e invertebrados.",
        "Add strontium following the manufacturer's instructions. It is important for growth of hard corals and calcareous skeletons.",
        "Stop strontium dosing and perform partial water changes. Excess Sr can negatively affect corals and invertebrates.",
    ),
    (
        "iodine",
        "Añade yodo con mucha precaución y en dosis pequeñas. Es importante para mudas de crustáceos y salud de corales blandos.",
        "Detén la dosificación de yodo. Un exceso puede ser tóxico para invertebrados y corales blandos.",
        "Add iodine very carefully in small doses. It is important for shrimp molting and soft coral health.",
        "Stop iodine dosing. Excess iodine can be toxic for invertebrates and soft corals.",
    ),
    (
        "oxygen",
        "Mejora la aireación y el movimiento en superficie. Revisa temperatura, densidad de peces y funcionamiento del skimmer o filtros.",
        "Un nivel alto de oxígeno suele ser positivo, pero revisa que no haya exceso de microburbujas dañinas para los tejidos.",
        "Improve aeration and surface agitation. Check temperature, fish stocking and skimmer or filter performance.",
        "High oxygen levels are usually positive but check that there are no harmful microbubbles irritating coral tissue.",
    ),
    (
        "gh",
        "Añade sales minerales específicas para acuarios de agua dulce hasta alcanzar el rango ideal para tus peces y plantas.",
        "Un GH alto puede afectar a peces sensibles como discos o tetras. Mezcla agua de osmosis inversa con el agua del grifo para reducir la dureza general.",
        "Add freshwater mineral salts until you reach the ideal range for your fish and plants.",
        "High GH can be stressful for sensitive species like discus or small tetras. Mix tap water with RO water to reduce general hardness.",
    ),
    (
        "freshwater_kh",
        "Añade un buffer de KH para evitar caídas bruscas de pH. Un KH estable da seguridad a peces y bacterias.",
        "Un KH alto eleva el pH y casi siempre lo vuelve muy estable. Si necesitas bajarlo, reduce elementos calcáreos y mezcla con agua de osmosis.",
        "Add a KH buffer to avoid sudden pH drops. A stable KH is very important for fish and bacteria.",
        "High KH raises pH and makes it very stable. If you need to lower it, reduce calcareous decorations and mix with RO water.",
    ),
    (
        "freshwater_ph",
        "Incrementa ligeramente el KH y mejora la aireación. Evita exceso de materia orgánica en descomposición que pueda acidificar demasiado el agua.",
        "Evita piedras y decoraciones calcáreas, aumenta el uso de troncos y hojas secas (como almendro indio) para ayudar a bajar el pH de forma natural.",
        "Slightly increase KH and improve aeration. Avoid excess decaying organic matter that can push pH too low.",
        "Avoid calcareous rocks and decorations, increase the use of driftwood and botanicals (like Indian almond leaves) to naturally lower pH.",
    ),
    (
        "nitrite_fw",
        "En un acuario maduro, el nitrito debe permanecer en 0. Cualquier lectura indica problemas con el ciclo del nitrógeno.",
        "Los nitritos son muy tóxicos. Realiza cambios de agua grandes, añade bacterias beneficiosas y reduce drásticamente la alimentación.",
        "In a mature aquarium nitrite should stay at 0. Any reading points to issues with the nitrogen cycle.",
        "Nitrite is highly toxic. Perform large water changes, add beneficial bacteria and drastically reduce feeding.",
    ),
    (
        "nitrate_fw",
        "Niveles muy bajos de nitrato pueden significar falta de nutrientes para las plantas. Ajusta la fertilización si tienes acuario plantado.",
        "Los nitratos altos favorecen algas y estrés en peces. Realiza cambios de agua, reduce la alimentación y considera incorporar más plantas naturales.",
        "Very low nitrate can mean lack of nutrients for plants. Adjust fertilization if you keep a planted tank.",
        "High nitrate promotes algae and stresses fish. Do water changes, reduce feeding and consider adding more live plants.",
    ),
    (
        "phosphate_fw",
        "Un fosfato demasiado bajo puede limitar el crecimiento de plantas en acuarios muy plantados. Ajusta la fertilización en función de las necesidades.",
        "Fosfatos elevados promueven un crecimiento excesivo de algas. Reduce la comida, sifonea el sustrato y utiliza resinas anti-fosfatos si es necesario.",
        "Extremely low phosphate can limit plant growth in heavily planted aquariums. Adjust fertilization accordingly.",
        "Elevated phosphate leads to algae blooms. Reduce food, siphon the substrate and use phosphate-removal resins if needed.",
    ),
    (
        "co2",
        "CO₂ bajo limita el crecimiento de plantas. Mejora la difusión de CO₂, revisa el flujo y ajusta el número de burbujas.",
        "Un CO₂ muy alto puede ser letal para los peces. Apaga el sistema de CO₂, aumenta la aireación y verifica el drop checker.",
        "Low CO₂ limits plant growth. Improve CO₂ diffusion, review flow and adjust bubble rate.",
        "Very high CO₂ can be lethal to fish. Turn off the CO₂ system, increase aeration and check your drop checker.",
    ),
    (
        "iron",
        "Añade suplemento de hierro para mejorar el color y crecimiento de plantas rojas y de alto requerimiento.",
        "Un exceso de hierro puede favorecer algas no deseadas. Reduce la dosis de fertilizante líquido y monitorea los valores.",
        "Add an iron supplement to improve color and growth in red and high-demand plants.",
        "Excess iron can fuel unwanted algae. Reduce liquid fertilizer dosage and monitor levels.",
    ),
    (
        "potassium_fw",
        "Añade potasio, uno de los macronutrientes básicos para el correcto crecimiento de las plantas acuáticas.",
        "Demasiado potasio puede causar agujeros o necrosis en hojas. Reduce la fertilización de potasio hasta estabilizar.",
        "Add potassium, one of the primary macronutrients needed for healthy aquatic plant growth.",
        "Too much potassium can cause holes or necrosis in leaves. Reduce potassium fertilization until things stabilize.",
    ),
    (
        "ammonia_fw",
        "En condiciones normales, el amonio debe ser 0. Si sube, revisa sobrepoblación y mantenimiento del filtro.",
        "El amonio es extremadamente tóxico. Realiza cambios de agua urgentes, añade bacterias, revisa filtración y reduce la alimentación.",
        "Under normal conditions ammonia should be 0. If it rises, review stocking levels and filter maintenance.",
        "Ammonia is extremely toxic. Perform emergency water changes, add bacteria, check filtration and reduce feeding.",
    ),
    (
        "tds",
        "Un TDS demasiado bajo puede afectar la estabilidad osmótica. Añade minerales de forma controlada hasta alcanzar el rango objetivo.",
        "Un TDS alto indica muchas sales disueltas. Usa agua de osmosis y realiza cambios de agua para ajustar al rango adecuado para tus peces.",
        "Very low TDS can affect osmotic stability. Add minerals carefully until you reach your target range.",
        "High TDS indicates many dissolved solids. Use RO water and perform water changes to reach the appropriate range for your species.",
    ),
    (
        "dissolved_oxygen",
        "Mejora la aireación, aumenta el movimiento de superficie y revisa la temperatura, ya que el agua caliente disuelve menos oxígeno.",
        "Un buen nivel de oxígeno es positivo para peces y bacterias. Solo revisa que no haya exceso de corrientes que estresen a los peces.",
        "Increase aeration, boost surface agitation and check temperature, since warm water holds less oxygen.",
        "Good oxygen levels are beneficial for fish and bacteria. Just make sure currents are not too strong for your fish.",
    ),
    (
        "temp_fw",
        "Incrementa la temperatura con un calentador fiable. Ajusta poco a poco hasta llegar al rango recomendado para tu especie.",
        "La temperatura alta acelera el metabolismo y reduce el oxígeno. Refresca el agua gradualmente y evita cambios bruscos.",
        "Increase temperature with a reliable heater. Adjust slowly until you reach the recommended range for your species.",
        "High temperature speeds metabolism and reduces oxygen. Cool the water gradually and avoid sudden temperature shocks.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marine_lookup_uses_plain_key() {
        let catalog = RecommendationCatalog::builtin();
        let advice = catalog
            .get_advice(&ParameterKey::Ph, Direction::High, MainType::Marine, Language::En)
            .unwrap();
        assert_eq!(advice.key, "ph");
        assert!(advice.text.contains("Kalkwasser"));
    }

    #[test]
    fn freshwater_lookup_prefers_qualified_key() {
        let catalog = RecommendationCatalog::builtin();
        let advice = catalog
            .get_advice(&ParameterKey::Ph, Direction::High, MainType::Freshwater, Language::En)
            .unwrap();
        assert_eq!(advice.key, "freshwater_ph");
        assert!(advice.text.contains("driftwood"));

        let kh = catalog
            .get_advice(&ParameterKey::Kh, Direction::Low, MainType::Freshwater, Language::Es)
            .unwrap();
        assert_eq!(kh.key, "freshwater_kh");
    }

    #[test]
    fn freshwater_lookup_falls_back_without_override() {
        let catalog = RecommendationCatalog::builtin();
        let advice = catalog
            .get_advice(&ParameterKey::Gh, Direction::Low, MainType::Freshwater, Language::En)
            .unwrap();
        assert_eq!(advice.key, "gh");
    }

    #[test]
    fn qualified_key_without_text_falls_back_to_plain_key() {
        let catalog = RecommendationCatalog::new(
            vec![
                RecommendationEntry {
                    key: "kh".to_string(),
                    advice: AdviceEntry {
                        low: Some(LocalizedText::new("bajo", "low")),
                        high: None,
                    },
                },
                RecommendationEntry {
                    key: "freshwater_kh".to_string(),
                    advice: AdviceEntry {
                        low: None,
                        high: Some(LocalizedText::new("alto", "high")),
                    },
                },
            ],
            AdviceOverrides::builtin(),
        );
        let low = catalog
            .get_advice(&ParameterKey::Kh, Direction::Low, MainType::Freshwater, Language::En)
            .unwrap();
        assert_eq!(low.key, "kh");
        let high = catalog
            .get_advice(&ParameterKey::Kh, Direction::High, MainType::Freshwater, Language::En)
            .unwrap();
        assert_eq!(high.key, "freshwater_kh");
    }

    #[test]
    fn missing_entries_yield_no_advice() {
        let catalog = RecommendationCatalog::builtin();
        assert!(catalog
            .get_advice(&ParameterKey::Nitrate, Direction::High, MainType::Marine, Language::Es)
            .is_none());
        assert!(catalog
            .get_advice(&ParameterKey::parse("boron"), Direction::Low, MainType::Marine, Language::Es)
            .is_none());
    }

    #[test]
    fn every_override_points_at_a_complete_entry() {
        let catalog = RecommendationCatalog::builtin();
        for (parameter, key) in catalog.overrides().iter() {
            let entry = catalog
                .entry(key)
                .unwrap_or_else(|| panic!("override for {} points at missing '{}'", parameter, key));
            for language in [Language::Es, Language::En] {
                assert!(entry.low.as_ref().and_then(|t| t.get(language)).is_some());
                assert!(entry.high.as_ref().and_then(|t| t.get(language)).is_some());
            }
        }
    }

    #[test]
    fn main_type_dependent_keys_have_overrides() {
        let overrides = AdviceOverrides::builtin();
        for parameter in [ParameterKey::Kh, ParameterKey::Ph, ParameterKey::No3, ParameterKey::Po4] {
            assert!(overrides.qualified_key(&parameter, MainType::Freshwater).is_some());
            assert!(overrides.qualified_key(&parameter, MainType::Marine).is_none());
        }
    }

    #[test]
    fn merge_replaces_entries_and_adds_overrides() {
        let mut catalog = RecommendationCatalog::builtin();
        let overlay = RecommendationCatalog::new(
            vec![RecommendationEntry {
                key: "gh_soft".to_string(),
                advice: AdviceEntry {
                    low: None,
                    high: Some(LocalizedText::new("Usa agua blanda.", "Use soft water.")),
                },
            }],
            AdviceOverrides::new([AdviceOverride {
                parameter: ParameterKey::Gh,
                freshwater_key: "gh_soft".to_string(),
            }]),
        );
        catalog.merge(overlay);

        let high = catalog
            .get_advice(&ParameterKey::Gh, Direction::High, MainType::Freshwater, Language::En)
            .unwrap();
        assert_eq!(high.text, "Use soft water.");
        // the overlay has no low side, so the plain key still answers
        let low = catalog
            .get_advice(&ParameterKey::Gh, Direction::Low, MainType::Freshwater, Language::En)
            .unwrap();
        assert_eq!(low.key, "gh");
    }
}
