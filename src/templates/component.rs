pub const INDEX_TSX: &str = r#"import type { {{name}}Props } from './types';
import * as S from './styles';

export const {{name}} = ({ children, ...rest }: {{name}}Props) => {
  return (
    <S.Container {...rest}>
      {children}
    </S.Container>
  );
};

export type { {{name}}Props } from './types';
"#;

pub const TYPES_TS: &str = r#"import { HTMLAttributes, ReactNode } from 'react';

export interface {{name}}Props extends HTMLAttributes<HTMLDivElement> {
  children?: ReactNode;
}
"#;

pub const STYLES_TS: &str = r#"import styled from '@emotion/styled';

export const Container = styled.div`
  display: flex;
`;
"#;

/// File name and template of each file in a component directory, in write order.
pub const FILES: [(&str, &str); 3] =
    [("index.tsx", INDEX_TSX), ("types.ts", TYPES_TS), ("styles.ts", STYLES_TS)];
