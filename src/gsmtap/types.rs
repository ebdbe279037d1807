//! GSMTAP protocol identifiers
//!
//! Closed code sets written into the `payload_type` and `sub_type` header
//! fields. Codes follow libosmocore's `gsmtap.h`.

use thiserror::Error;

/// A code outside one of the closed sets below
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown {kind} code: {code:#04x}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: u8,
}

macro_rules! wire_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $variant = $code ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn code(self) -> u8 {
                self as u8
            }

            /// Name as used by capture dissectors
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = UnknownCode;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(UnknownCode { kind: stringify!($name), code }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

wire_codes! {
    /// Technology of the encapsulated message
    #[derive(clap::ValueEnum)]
    pub enum PayloadType {
        Um = 0x01 => "UM",
        Abis = 0x02 => "ABIS",
        UmBurst = 0x03 => "UM_BURST",
        Sim = 0x04 => "SIM",
        GbLlc = 0x08 => "GB_LLC",
        GbSndcp = 0x09 => "GB_SNDCP",
        UmtsRrc = 0x0c => "UMTS_RRC",
        LteRrc = 0x0d => "LTE_RRC",
        LteMac = 0x0e => "LTE_MAC",
        LteMacFramed = 0x0f => "LTE_MAC_FRAMED",
        OsmocoreLog = 0x10 => "OSMOCORE_LOG",
        QcDiag = 0x11 => "QC_DIAG",
        LteNas = 0x12 => "LTE_NAS",
    }
}

wire_codes! {
    /// GSM logical channel, used as `sub_type` for [`PayloadType::Um`]
    #[derive(clap::ValueEnum)]
    pub enum Channel {
        Unknown = 0x00 => "UNKNOWN",
        Bcch = 0x01 => "BCCH",
        Ccch = 0x02 => "CCCH",
        Rach = 0x03 => "RACH",
        Agch = 0x04 => "AGCH",
        Pch = 0x05 => "PCH",
        Sdcch = 0x06 => "SDCCH",
        Sdcch4 = 0x07 => "SDCCH4",
        Sdcch8 = 0x08 => "SDCCH8",
        TchF = 0x09 => "TCH_F",
        TchH = 0x0a => "TCH_H",
        Pacch = 0x0b => "PACCH",
        Cbch52 = 0x0c => "CBCH52",
        Pdch = 0x0d => "PDCH",
        Ptcch = 0x0e => "PTCCH",
        Cbch51 = 0x0f => "CBCH51",
    }
}

wire_codes! {
    /// UMTS RRC message type, used as `sub_type` for [`PayloadType::UmtsRrc`]
    pub enum UmtsRrcType {
        DlDcch = 0 => "DL_DCCH",
        UlDcch = 1 => "UL_DCCH",
        DlCcch = 2 => "DL_CCCH",
        UlCcch = 3 => "UL_CCCH",
        Pcch = 4 => "PCCH",
        DlShcch = 5 => "DL_SHCCH",
        UlShcch = 6 => "UL_SHCCH",
        BcchFach = 7 => "BCCH_FACH",
        BcchBch = 8 => "BCCH_BCH",
        Mcch = 9 => "MCCH",
        Msch = 10 => "MSCH",
        HandoverToUtranCommand = 11 => "HandoverToUTRANCommand",
        InterRatHandoverInfo = 12 => "InterRATHandoverInfo",
        SystemInformationBch = 13 => "SystemInformation_BCH",
        SystemInformationContainer = 14 => "System_Information_Container",
        UeRadioAccessCapabilityInfo = 15 => "UE_RadioAccessCapabilityInfo",
        MasterInformationBlock = 16 => "MasterInformationBlock",
        SysInfoType1 = 17 => "SysInfoType1",
        SysInfoType2 = 18 => "SysInfoType2",
        SysInfoType3 = 19 => "SysInfoType3",
        SysInfoType4 = 20 => "SysInfoType4",
        SysInfoType5 = 21 => "SysInfoType5",
        SysInfoType5bis = 22 => "SysInfoType5bis",
        SysInfoType6 = 23 => "SysInfoType6",
        SysInfoType7 = 24 => "SysInfoType7",
        SysInfoType8 = 25 => "SysInfoType8",
        SysInfoType9 = 26 => "SysInfoType9",
        SysInfoType10 = 27 => "SysInfoType10",
        SysInfoType11 = 28 => "SysInfoType11",
        SysInfoType11bis = 29 => "SysInfoType11bis",
        SysInfoType12 = 30 => "SysInfoType12",
        SysInfoType13 = 31 => "SysInfoType13",
        SysInfoType13_1 = 32 => "SysInfoType13_1",
        SysInfoType13_2 = 33 => "SysInfoType13_2",
        SysInfoType13_3 = 34 => "SysInfoType13_3",
        SysInfoType13_4 = 35 => "SysInfoType13_4",
        SysInfoType14 = 36 => "SysInfoType14",
        SysInfoType15 = 37 => "SysInfoType15",
        SysInfoType15bis = 38 => "SysInfoType15bis",
        SysInfoType15_1 = 39 => "SysInfoType15_1",
        SysInfoType15_1bis = 40 => "SysInfoType15_1bis",
        SysInfoType15_2 = 41 => "SysInfoType15_2",
        SysInfoType15_2bis = 42 => "SysInfoType15_2bis",
        SysInfoType15_2ter = 43 => "SysInfoType15_2ter",
        SysInfoType15_3 = 44 => "SysInfoType15_3",
        SysInfoType15_3bis = 45 => "SysInfoType15_3bis",
        SysInfoType15_4 = 46 => "SysInfoType15_4",
        SysInfoType15_5 = 47 => "SysInfoType15_5",
        SysInfoType15_6 = 48 => "SysInfoType15_6",
        SysInfoType15_7 = 49 => "SysInfoType15_7",
        SysInfoType15_8 = 50 => "SysInfoType15_8",
        SysInfoType16 = 51 => "SysInfoType16",
        SysInfoType17 = 52 => "SysInfoType17",
        SysInfoType18 = 53 => "SysInfoType18",
        SysInfoType19 = 54 => "SysInfoType19",
        SysInfoType20 = 55 => "SysInfoType20",
        SysInfoType21 = 56 => "SysInfoType21",
        SysInfoType22 = 57 => "SysInfoType22",
        SysInfoTypeSb1 = 58 => "SysInfoTypeSB1",
        SysInfoTypeSb2 = 59 => "SysInfoTypeSB2",
        ToTargetRncContainer = 60 => "ToTargetRNC_Container",
        TargetRncToSourceRncContainer = 61 => "TargetRNC_ToSourceRNC_Container",
    }
}

wire_codes! {
    /// LTE RRC message type, used as `sub_type` for [`PayloadType::LteRrc`]
    pub enum LteRrcType {
        DlCcch = 0 => "DL_CCCH",
        DlDcch = 1 => "DL_DCCH",
        UlCcch = 2 => "UL_CCCH",
        UlDcch = 3 => "UL_DCCH",
        BcchBch = 4 => "BCCH_BCH",
        BcchDlSch = 5 => "BCCH_DL_SCH",
        Pcch = 6 => "PCCH",
        Mcch = 7 => "MCCH",
        BcchBchMbms = 8 => "BCCH_BCH_MBMS",
        BcchDlSchBr = 9 => "BCCH_DL_SCH_BR",
        BcchDlSchMbms = 10 => "BCCH_DL_SCH_MBMS",
        ScMcch = 11 => "SC_MCCH",
        SbcchSlBch = 12 => "SBCCH_SL_BCH",
        SbcchSlBchV2x = 13 => "SBCCH_SL_BCH_V2X",
        DlCcchNb = 14 => "DL_CCCH_NB",
        DlDcchNb = 15 => "DL_DCCH_NB",
        UlCcchNb = 16 => "UL_CCCH_NB",
        UlDcchNb = 17 => "UL_DCCH_NB",
        BcchBchNb = 18 => "BCCH_BCH_NB",
        BcchBchTddNb = 19 => "BCCH_BCH_TDD_NB",
        BcchDlSchNb = 20 => "BCCH_DL_SCH_NB",
        PcchNb = 21 => "PCCH_NB",
        ScMcchNb = 22 => "SC_MCCH_NB",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_type_codes() {
        assert_eq!(PayloadType::Um.code(), 0x01);
        assert_eq!(PayloadType::UmtsRrc.code(), 0x0c);
        assert_eq!(PayloadType::LteRrc.code(), 0x0d);
        assert_eq!(PayloadType::LteNas.code(), 0x12);
        assert_eq!(PayloadType::ALL.len(), 13);
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Channel::ALL.len(), 16);
        assert_eq!(UmtsRrcType::ALL.len(), 62);
        assert_eq!(LteRrcType::ALL.len(), 23);
    }

    #[test]
    fn test_codes_roundtrip_through_u8() {
        for &t in UmtsRrcType::ALL {
            assert_eq!(UmtsRrcType::try_from(u8::from(t)), Ok(t));
        }
        for &t in LteRrcType::ALL {
            assert_eq!(LteRrcType::try_from(t.code()), Ok(t));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(
            PayloadType::try_from(0x05),
            Err(UnknownCode { kind: "PayloadType", code: 0x05 })
        );
        assert!(LteRrcType::try_from(23).is_err());
        assert!(Channel::try_from(0x10).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(UmtsRrcType::SysInfoType15_2ter.name(), "SysInfoType15_2ter");
        assert_eq!(UmtsRrcType::TargetRncToSourceRncContainer.code(), 61);
        assert_eq!(LteRrcType::BcchDlSch.to_string(), "BCCH_DL_SCH");
        assert_eq!(Channel::TchF.to_string(), "TCH_F");
    }
}
